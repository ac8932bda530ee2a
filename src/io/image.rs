//! PNG export of rendered sheets

use crate::io::configuration::IMAGE_EXTENSION;
use crate::io::error::{FingerprintError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// File name of the sheet for `id`
pub fn sheet_file_name(id: &str) -> String {
    format!("{id}.{IMAGE_EXTENSION}")
}

/// Save a sheet as `<output_dir>/<id>.png`, creating the directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - The image cannot be encoded or written
pub fn save_sheet(page: &RgbImage, output_dir: &Path, id: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| FingerprintError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = output_dir.join(sheet_file_name(id));
    page.save(&path).map_err(|e| FingerprintError::ImageExport {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "saved sheet");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/io/image.rs"]
mod tests;
