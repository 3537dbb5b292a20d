pub mod aggregate;
pub mod data_url;

pub use aggregate::{is_image_mime, BinaryFile, FileDescriptor, UploadedImage};
pub use data_url::{DataUrlError, DecodedDataUrl};
