pub mod api;
pub mod drop_zone;
pub mod preview_card;
pub mod result_card;
pub mod view;
pub mod view_model;

pub use view::ClassifyPage;
