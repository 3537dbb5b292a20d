pub mod handlers;
pub mod routes;
pub mod shared;

pub use routes::configure_routes;
pub use shared::state::AppState;
