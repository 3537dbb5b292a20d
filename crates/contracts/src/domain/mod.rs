pub mod a001_uploaded_image;
pub mod a002_classification_result;
