// SPDX-License-Identifier: MPL-2.0
//! Filesystem export adapter.
//!
//! Applies the requested transform at full resolution and writes the encoded
//! result into the destination directory, picking a collision-free filename.

use crate::application::port::export::{ExportError, ExportRequest, FilterExporter};
use crate::error::Error;
use crate::media::{export, filter_render};
use std::fs;
use std::path::PathBuf;

/// Writes filtered renditions to a destination directory.
///
/// Destination resolution order: the directory configured on the request,
/// the platform Downloads directory, the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExporter;

impl FileExporter {
    fn resolve_destination(request: &ExportRequest) -> Result<PathBuf, ExportError> {
        if let Some(dir) = &request.destination {
            return Ok(dir.clone());
        }
        dirs::download_dir()
            .or_else(|| std::env::current_dir().ok())
            .ok_or(ExportError::NoDestination)
    }
}

impl FilterExporter for FileExporter {
    fn export(&self, request: &ExportRequest) -> Result<PathBuf, ExportError> {
        let expected_len = request.width as usize * request.height as usize * 4;
        if request.rgba.len() != expected_len {
            return Err(ExportError::InvalidFrame);
        }

        let matrix = match filter_render::parse_transform(&request.transform) {
            Ok(matrix) => matrix,
            Err(Error::Filter(message)) => return Err(ExportError::InvalidTransform(message)),
            Err(other) => return Err(ExportError::InvalidTransform(other.to_string())),
        };

        let dir = Self::resolve_destination(request)?;
        fs::create_dir_all(&dir).map_err(|e| ExportError::Io(e.to_string()))?;

        let mut pixels = (*request.rgba).clone();
        filter_render::apply_to_rgba(&mut pixels, &matrix);

        let path = export::unique_destination(
            &dir,
            &request.file_stem,
            &request.filter_name,
            request.format,
        );
        match export::save_rgba(&path, request.width, request.height, &pixels, request.format) {
            Ok(()) => Ok(path),
            Err(Error::Image(message)) => Err(ExportError::Encode(message)),
            Err(other) => Err(ExportError::Io(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ExportFormat;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn request_into(dir: Option<PathBuf>, transform: &str) -> ExportRequest {
        ExportRequest {
            file_stem: "photo".to_string(),
            filter_name: "Negative".to_string(),
            transform: transform.to_string(),
            rgba: Arc::new(vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
            format: ExportFormat::Png,
            destination: dir,
        }
    }

    #[test]
    fn export_writes_filtered_pixels() {
        let dir = tempdir().expect("temp dir");
        let request = request_into(Some(dir.path().to_path_buf()), "invert(1)");

        let path = FileExporter.export(&request).expect("export should succeed");
        assert_eq!(path, dir.path().join("photo-negative.png"));

        let decoded = image_rs::open(&path).expect("written file should decode");
        let pixel = decoded.to_rgba8().get_pixel(0, 0).0;
        assert_eq!(pixel, [255, 255, 255, 255]);
    }

    #[test]
    fn export_numbers_colliding_filenames() {
        let dir = tempdir().expect("temp dir");
        let request = request_into(Some(dir.path().to_path_buf()), "invert(1)");

        let first = FileExporter.export(&request).expect("first export");
        let second = FileExporter.export(&request).expect("second export");

        assert_eq!(first, dir.path().join("photo-negative.png"));
        assert_eq!(second, dir.path().join("photo-negative-2.png"));
    }

    #[test]
    fn export_rejects_unknown_transform() {
        let dir = tempdir().expect("temp dir");
        let request = request_into(Some(dir.path().to_path_buf()), "vortex(1)");

        match FileExporter.export(&request) {
            Err(ExportError::InvalidTransform(message)) => assert!(message.contains("vortex")),
            other => panic!("expected InvalidTransform, got {other:?}"),
        }
    }

    #[test]
    fn export_rejects_mismatched_frame() {
        let dir = tempdir().expect("temp dir");
        let mut request = request_into(Some(dir.path().to_path_buf()), "none");
        request.width = 8;

        assert_eq!(
            FileExporter.export(&request),
            Err(ExportError::InvalidFrame)
        );
    }

    #[test]
    fn export_creates_missing_destination_directory() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("exports").join("tinted");
        let request = request_into(Some(nested.clone()), "none");

        let path = FileExporter.export(&request).expect("export should succeed");
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
