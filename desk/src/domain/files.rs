//! File-input checks for product images, avatars and NFe XML.
//!
//! Every rejection happens here, before anything is uploaded.

use std::path::Path;

use lib_utils::data_url_encode;

use crate::core::error::{AppError, Result};

/// 1.5 MiB
pub const MAX_IMAGE_BYTES: usize = 1_572_864;

/// Image MIME type inferred from the file extension.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

fn checked_mime(path: &Path) -> Result<&'static str> {
    image_mime(path).ok_or_else(|| AppError::FileInput("Please pick an image file (PNG, JPG, GIF, WEBP)".into()))
}

fn check_size(len: u64) -> Result<()> {
    if len > MAX_IMAGE_BYTES as u64 {
        return Err(AppError::FileInput("Image must be at most 1.5MB".into()));
    }
    Ok(())
}

fn unreadable(path: &Path, e: std::io::Error) -> AppError {
    AppError::FileInput(format!("Could not read {}: {}", path.display(), e))
}

/// Validate a picked image and encode it as a `data:` URL.
pub fn image_data_url(path: &Path, content: &[u8]) -> Result<String> {
    let mime = checked_mime(path)?;
    check_size(content.len() as u64)?;
    Ok(data_url_encode(mime, content))
}

/// Read and encode an image from disk. Type and size are checked before reading.
pub fn read_image(path: &Path) -> Result<String> {
    checked_mime(path)?;
    let len = std::fs::metadata(path).map_err(|e| unreadable(path, e))?.len();
    check_size(len)?;
    let content = std::fs::read(path).map_err(|e| unreadable(path, e))?;
    image_data_url(path, &content)
}

/// Only `.xml` files are accepted for NFe import.
pub fn ensure_xml(path: &Path) -> Result<()> {
    let is_xml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"));
    if is_xml {
        Ok(())
    } else {
        Err(AppError::FileInput("Only XML files can be imported".into()))
    }
}

/// Read a picked NFe file, returning its file name and bytes.
pub fn read_xml(path: &Path) -> Result<(String, Vec<u8>)> {
    ensure_xml(path)?;
    let content = std::fs::read(path).map_err(|e| unreadable(path, e))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("nfe.xml")
        .to_string();
    Ok((name, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_image_mime_by_extension() {
        assert_eq!(image_mime(Path::new("a/photo.JPG")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("logo.png")), Some("image/png"));
        assert_eq!(image_mime(Path::new("notes.txt")), None);
        assert_eq!(image_mime(Path::new("noext")), None);
    }

    #[test]
    fn test_image_data_url() {
        let url = image_data_url(Path::new("p.png"), &[1, 2, 3]).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_oversize_image_is_rejected() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        let err = image_data_url(Path::new("p.png"), &big).unwrap_err();
        assert!(matches!(err, AppError::FileInput(_)));

        let exact = vec![0u8; MAX_IMAGE_BYTES];
        assert!(image_data_url(Path::new("p.png"), &exact).is_ok());
    }

    #[test]
    fn test_non_image_is_rejected_without_reading() {
        let err = read_image(&PathBuf::from("/does/not/exist.pdf")).unwrap_err();
        assert!(err.user_message("").contains("image"));
    }

    #[test]
    fn test_oversize_image_file_is_rejected_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES as u64 + 1).unwrap();

        let err = read_image(&path).unwrap_err();

        assert!(err.user_message("").contains("1.5MB"));
    }

    #[test]
    fn test_read_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let url = read_image(&path).unwrap();

        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_only_xml_is_accepted() {
        assert!(ensure_xml(Path::new("nota.XML")).is_ok());
        assert!(ensure_xml(Path::new("nota.pdf")).is_err());
        assert!(ensure_xml(Path::new("nota")).is_err());
    }

    #[test]
    fn test_read_xml_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("35240101.xml");
        std::fs::write(&path, "<nfeProc/>").unwrap();

        let (name, content) = read_xml(&path).unwrap();

        assert_eq!(name, "35240101.xml");
        assert_eq!(content, b"<nfeProc/>");
    }
}
