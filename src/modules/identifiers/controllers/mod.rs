pub mod identifier_controller;

pub use identifier_controller::configure;
