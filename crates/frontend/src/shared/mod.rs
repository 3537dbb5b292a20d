pub mod api_utils;
pub mod client_log;
pub mod config;
pub mod icons;
pub mod starfield;
