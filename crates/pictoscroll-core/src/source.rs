use std::path::PathBuf;

use image::DynamicImage;

use crate::error::{Error, Result};

/// One entry accepted by the image-adding API: a filesystem path (the URL
/// string of the original surface), raw encoded bytes, or an already decoded
/// image handle.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
    Loaded(DynamicImage),
}

impl ImageSource {
    /// Decode this source into an image. Path and byte sources go through the
    /// `image` crate; a `Loaded` source is returned as-is.
    pub fn load(self) -> Result<DynamicImage> {
        match self {
            ImageSource::Path(path) => image::open(&path).map_err(|e| {
                Error::Source(format!("cannot load image from {}: {e}", path.display()))
            }),
            ImageSource::Bytes(bytes) => image::load_from_memory(&bytes)
                .map_err(|e| Error::Source(format!("cannot decode image bytes: {e}"))),
            ImageSource::Loaded(img) => Ok(img),
        }
    }
}

/// Decode a batch of sources all-or-nothing: the first failing entry aborts
/// the whole batch so callers never observe a partially registered sequence.
pub fn load_all<I>(sources: I) -> Result<Vec<DynamicImage>>
where
    I: IntoIterator<Item = ImageSource>,
{
    sources.into_iter().map(ImageSource::load).collect()
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        ImageSource::Path(PathBuf::from(value))
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        ImageSource::Path(PathBuf::from(value))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(value: PathBuf) -> Self {
        ImageSource::Path(value)
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(value: DynamicImage) -> Self {
        ImageSource::Loaded(value)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(value: Vec<u8>) -> Self {
        ImageSource::Bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn sample_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255])))
    }

    #[test]
    fn test_loaded_source_passes_through() {
        let img = sample_image(4, 2);
        let loaded = ImageSource::from(img.clone()).load().unwrap();
        assert_eq!(loaded.width(), 4);
        assert_eq!(loaded.height(), 2);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let err = ImageSource::Bytes(vec![0, 1, 2, 3]).load().unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[test]
    fn test_missing_path_fails() {
        let err = ImageSource::from("/nonexistent/pictoscroll.png")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[test]
    fn test_load_all_is_all_or_nothing() {
        let sources = vec![
            ImageSource::from(sample_image(2, 2)),
            ImageSource::Bytes(vec![0xff]),
            ImageSource::from(sample_image(2, 2)),
        ];
        assert!(load_all(sources).is_err());

        let sources = vec![
            ImageSource::from(sample_image(2, 2)),
            ImageSource::from(sample_image(3, 3)),
        ];
        assert_eq!(load_all(sources).unwrap().len(), 2);
    }
}
