pub mod common;
pub mod u101_classify_image;
