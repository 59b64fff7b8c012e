// SPDX-License-Identifier: MPL-2.0
//! Image handling: loading, filter rendering, and export encoding.

pub mod export;
pub mod filter_render;
pub mod image;

use std::path::Path;

// Re-export commonly used types
pub use export::ExportFormat;
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions accepted by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns `true` if the path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
