pub mod error;
pub mod orchestrate;
pub mod server;
