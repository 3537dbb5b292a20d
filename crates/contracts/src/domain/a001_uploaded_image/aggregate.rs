use super::data_url::{self, DataUrlError};

/// Metadata of a user-supplied file before its bytes are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    /// Content type as declared by the browser (may be empty)
    pub mime: String,
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime)
    }
}

/// `image/*` check: the type must be `image/` followed by a subtype
pub fn is_image_mime(mime: &str) -> bool {
    let mime = mime.trim();
    match mime.split_once('/') {
        Some((kind, subtype)) => kind.eq_ignore_ascii_case("image") && !subtype.trim().is_empty(),
        None => false,
    }
}

/// Image currently staged for preview and submission.
///
/// The preview data URL is the only copy of the bytes kept in the session;
/// [`UploadedImage::to_binary_file`] recovers them at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime: String,
    pub size: usize,
    pub preview_url: String,
}

impl UploadedImage {
    pub fn from_bytes(file_name: impl Into<String>, mime: impl Into<String>, bytes: &[u8]) -> Self {
        let mime = mime.into();
        let preview_url = data_url::encode(&mime, bytes);
        Self {
            file_name: file_name.into(),
            mime,
            size: bytes.len(),
            preview_url,
        }
    }

    /// Decode the preview back into a file ready for upload
    pub fn to_binary_file(&self) -> Result<BinaryFile, DataUrlError> {
        BinaryFile::from_data_url(&self.preview_url, &self.file_name)
    }

    /// Size formatted for display, e.g. `12.3 KB`
    pub fn human_size(&self) -> String {
        format_size(self.size)
    }
}

/// Raw bytes tagged with a MIME type and file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl BinaryFile {
    pub fn from_data_url(url: &str, file_name: &str) -> Result<Self, DataUrlError> {
        let decoded = data_url::decode(url)?;
        Ok(Self {
            file_name: file_name.to_string(),
            mime: decoded.mime,
            bytes: decoded.bytes,
        })
    }
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(is_image_mime("IMAGE/JPEG"));

        assert!(!is_image_mime(""));
        assert!(!is_image_mime("image"));
        assert!(!is_image_mime("image/"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("video/image"));
    }

    #[test]
    fn test_binary_file_round_trip() {
        let bytes = b"\xff\xd8\xff\xe0 fake jpeg body".to_vec();
        let image = UploadedImage::from_bytes("shoe.jpg", "image/jpeg", &bytes);

        assert!(image.preview_url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(image.size, bytes.len());

        let file = image.to_binary_file().unwrap();
        assert_eq!(file.file_name, "shoe.jpg");
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.bytes, bytes);
    }

    #[test]
    fn test_corrupted_preview_is_malformed() {
        let mut image = UploadedImage::from_bytes("bag.png", "image/png", b"png");
        image.preview_url = "data:image/png;base64".to_string();
        assert_eq!(image.to_binary_file(), Err(DataUrlError::MissingDelimiter));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
