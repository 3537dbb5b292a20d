use crate::domain::a001_uploaded_image::BinaryFile;

/// Multipart field the classifier reads the upload from
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: String,
    pub file: BinaryFile,
}

/// Platform-neutral description of a `multipart/form-data` body.
/// Transports turn it into their native form type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    pub parts: Vec<FilePart>,
}

impl MultipartForm {
    /// Body with the image as the only part, under [`FILE_FIELD`]
    pub fn single_file(file: BinaryFile) -> Self {
        Self {
            parts: vec![FilePart {
                field_name: FILE_FIELD.to_string(),
                file,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_part() {
        let file = BinaryFile {
            file_name: "coat.webp".to_string(),
            mime: "image/webp".to_string(),
            bytes: vec![1, 2, 3],
        };
        let form = MultipartForm::single_file(file.clone());
        assert_eq!(form.parts.len(), 1);
        assert_eq!(form.parts[0].field_name, "file");
        assert_eq!(form.parts[0].file, file);
    }
}
