//! Vision Image Type - an uploaded picture embedded as a data URI

use serde::{Deserialize, Serialize};

/// Image formats accepted for the vision board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl VisionImageFormat {
    /// File extensions offered by the file picker
    pub const EXTENSIONS: [&'static str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

    pub fn mime(&self) -> &'static str {
        match self {
            VisionImageFormat::Png => "image/png",
            VisionImageFormat::Jpeg => "image/jpeg",
            VisionImageFormat::Webp => "image/webp",
            VisionImageFormat::Gif => "image/gif",
        }
    }

    /// Map a sniffed `image` format onto the supported set
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(VisionImageFormat::Png),
            image::ImageFormat::Jpeg => Some(VisionImageFormat::Jpeg),
            image::ImageFormat::WebP => Some(VisionImageFormat::Webp),
            image::ImageFormat::Gif => Some(VisionImageFormat::Gif),
            _ => None,
        }
    }
}

/// A decoded upload, ready to be shown in an `img` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionImage {
    /// Format: "data:image/png;base64,..."
    pub data_uri: String,
    pub format: VisionImageFormat,
    pub width: u32,
    pub height: u32,
}

impl VisionImage {
    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        !self.data_uri.is_empty()
    }

    /// Length of the embedded payload in bytes (after base64 encoding)
    pub fn payload_len(&self) -> usize {
        self.data_uri
            .split_once(',')
            .map(|(_, payload)| payload.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_available() {
        let img = VisionImage {
            data_uri: "data:image/png;base64,iVBORw0KG".to_string(),
            format: VisionImageFormat::Png,
            width: 1,
            height: 1,
        };
        assert!(img.is_available());
        assert_eq!(img.payload_len(), 9);
    }

    #[test]
    fn test_empty_not_available() {
        let img = VisionImage {
            data_uri: String::new(),
            format: VisionImageFormat::Jpeg,
            width: 0,
            height: 0,
        };
        assert!(!img.is_available());
        assert_eq!(img.payload_len(), 0);
    }

    #[test]
    fn test_format_mapping() {
        assert_eq!(
            VisionImageFormat::from_image_format(image::ImageFormat::WebP),
            Some(VisionImageFormat::Webp)
        );
        assert_eq!(
            VisionImageFormat::from_image_format(image::ImageFormat::Bmp),
            None
        );
        assert_eq!(VisionImageFormat::Jpeg.mime(), "image/jpeg");
    }
}
