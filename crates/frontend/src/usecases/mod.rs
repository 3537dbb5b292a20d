pub mod u101_classify_image;
