//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, peer address)
//!     → handlers.rs (counter operations)
//!     → response.rs (errors as JSON, panics as 500)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{ClientAddr, X_REQUEST_ID};
pub use response::AppError;
pub use server::{AppState, HttpServer};
