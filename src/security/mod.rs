//! Security subsystem.
//!
//! Response hardening only: the counter has no authentication and no rate
//! limiting. See `headers.rs`.

pub mod headers;
