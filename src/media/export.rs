// SPDX-License-Identifier: MPL-2.0
//! Export encoding for filtered renditions.
//!
//! This module provides the output format catalog, destination filename
//! generation, and the RGBA-to-file save step using the `image` crate.

use crate::error::{Error, Result};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported output formats for filtered renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// PNG format (lossless, keeps alpha).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size, alpha dropped).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Returns the image format for the `image` crate.
    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Returns all supported formats.
    #[must_use]
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Png, ExportFormat::Jpeg]
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }
}

/// Lowercases a preset name into a filename-safe slug.
///
/// Runs of characters outside `[a-z0-9]` collapse into single dashes.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Picks a destination path that does not collide with an existing file.
///
/// The first candidate is `{stem}-{filter-slug}.{ext}`; on collision a
/// counter is appended (`-2`, `-3`, ...).
#[must_use]
pub fn unique_destination(
    dir: &Path,
    stem: &str,
    filter_name: &str,
    format: ExportFormat,
) -> PathBuf {
    let slug = slugify(filter_name);
    let base = if slug.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}-{slug}")
    };

    let mut candidate = dir.join(format!("{base}.{}", format.extension()));
    let mut attempt = 1u32;
    while candidate.exists() {
        attempt += 1;
        candidate = dir.join(format!("{base}-{attempt}.{}", format.extension()));
    }
    candidate
}

/// Encodes an RGBA buffer and writes it to `path` in the given format.
///
/// For JPEG the buffer is converted to RGB first (JPEG has no alpha).
///
/// # Errors
///
/// Returns [`Error::Image`] if the buffer does not match the dimensions or
/// encoding fails, and [`Error::Io`] if the file cannot be written.
pub fn save_rgba<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    rgba: &[u8],
    format: ExportFormat,
) -> Result<()> {
    let path = path.as_ref();

    let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(width, height, rgba.to_vec())
        .ok_or_else(|| Error::Image("pixel buffer does not match dimensions".to_string()))?;

    if format == ExportFormat::Jpeg {
        let rgb_img = image_rs::DynamicImage::ImageRgba8(img).to_rgb8();
        rgb_img
            .save_with_format(path, format.image_format())
            .map_err(|e| Error::Io(format!("failed to save rendition: {e}")))?;
    } else {
        img.save_with_format(path, format.image_format())
            .map_err(|e| Error::Io(format!("failed to save rendition: {e}")))?;
    }

    Ok(())
}
