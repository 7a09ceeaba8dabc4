pub mod config;
pub mod error;
pub mod response;
pub mod extractors;
pub mod handlers;
pub mod router;
