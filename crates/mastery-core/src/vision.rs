//! Vision board: one uploaded image per goal.
//!
//! Uploads are sniffed and decoded with the `image` crate to reject anything
//! that is not a picture, then embedded unchanged as a base64 data URI.

use std::collections::HashMap;
use std::path::Path;

use base64::Engine;

use crate::error::{MasteryError, MasteryResult};
use crate::types::{VisionImage, VisionImageFormat};

/// Goal name -> uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisionBoard {
    images: HashMap<String, VisionImage>,
    /// Goals in upload order, most recent last
    history: Vec<String>,
}

impl VisionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an image for a goal, replacing any earlier upload.
    pub fn insert(&mut self, goal: impl Into<String>, image: VisionImage) {
        let goal = goal.into();
        self.history.retain(|g| *g != goal);
        self.history.push(goal.clone());
        self.images.insert(goal, image);
    }

    pub fn get(&self, goal: &str) -> Option<&VisionImage> {
        self.images.get(goal)
    }

    pub fn remove(&mut self, goal: &str) -> Option<VisionImage> {
        self.history.retain(|g| g != goal);
        self.images.remove(goal)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The most recently uploaded image that is still on the board
    pub fn latest(&self) -> Option<(&str, &VisionImage)> {
        let goal = self.history.last()?;
        self.images.get(goal).map(|img| (goal.as_str(), img))
    }

    /// Goals from `goals` that have no image yet, in the given order
    pub fn missing_for<'a>(&self, goals: &'a [String]) -> Vec<&'a str> {
        goals
            .iter()
            .filter(|g| !self.images.get(g.as_str()).is_some_and(VisionImage::is_available))
            .map(String::as_str)
            .collect()
    }
}

/// Decode an uploaded file into a displayable data URI.
///
/// `None` means the picker returned no file.
pub fn encode_image(bytes: Option<&[u8]>) -> MasteryResult<VisionImage> {
    let bytes = bytes.ok_or_else(|| MasteryError::InvalidFile("no file selected".to_string()))?;
    if bytes.is_empty() {
        return Err(MasteryError::InvalidFile("file is empty".to_string()));
    }

    let sniffed = image::guess_format(bytes)
        .map_err(|e| MasteryError::InvalidFile(format!("not an image: {}", e)))?;
    let format = VisionImageFormat::from_image_format(sniffed).ok_or_else(|| {
        MasteryError::InvalidFile(format!("unsupported image format: {:?}", sniffed))
    })?;
    let decoded = image::load_from_memory_with_format(bytes, sniffed)
        .map_err(|e| MasteryError::InvalidFile(format!("failed to decode image: {}", e)))?;

    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(VisionImage {
        data_uri: format!("data:{};base64,{}", format.mime(), payload),
        format,
        width: decoded.width(),
        height: decoded.height(),
    })
}

/// Read and decode an image file off the UI thread.
pub async fn encode_file(path: impl AsRef<Path>) -> MasteryResult<VisionImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| MasteryError::InvalidFile(format!("{}: {}", path.display(), e)))?;

    tokio::task::spawn_blocking(move || encode_image(Some(&bytes)))
        .await
        .map_err(|e| MasteryError::InvalidFile(format!("decode task failed: {}", e)))?
}

#[cfg(test)]
pub(crate) mod fixtures {
    use image::{ImageFormat, Rgb, RgbImage};

    /// A small solid-colour image encoded in the given format
    pub fn image_bytes(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 80, 160]));
        let mut buffer = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buffer), format)
            .expect("encode fixture");
        buffer
    }

    pub fn png_bytes() -> Vec<u8> {
        image_bytes(ImageFormat::Png, 4, 3)
    }
}
