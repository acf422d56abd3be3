// Handler modules
pub mod browse;
pub mod open;
pub mod routes;

// Re-export all handler functions
pub use browse::handle_browse;
pub use open::{handle_open, render_view};
pub use routes::handle_routes;
