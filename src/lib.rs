//! Profile view counter library.
//!
//! In-memory view counting with an SVG badge, served over HTTP.

pub mod badge;
pub mod config;
pub mod counter;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::CounterConfig;
pub use counter::CounterService;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
