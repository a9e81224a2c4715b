//! View counting subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/views
//!     → visitor.rs (resolve identifier from peer address / headers)
//!     → service.rs (CounterService::record_view)
//!     → store.rs (ViewStore: increment, timestamp, insert visitor)
//!     → state.rs (ViewState, snapshots handed back to handlers)
//! ```
//!
//! # Design Decisions
//! - State lives behind the `ViewStore` trait, injected as handler state
//! - One lock covers the whole `ViewState` so a recorded view is atomic
//! - Visitor set grows without bound and is never cleared

pub mod service;
pub mod state;
pub mod store;
pub mod visitor;

pub use service::CounterService;
pub use state::{RecordedView, ViewSnapshot, ViewState};
pub use store::{InMemoryViewStore, ViewStore};
pub use visitor::resolve_visitor;
