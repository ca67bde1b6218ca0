pub mod cors;
pub mod error_handler;

pub use cors::cors;
pub use error_handler::json_error_handler;
