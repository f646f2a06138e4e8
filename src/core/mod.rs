//! Core services
//!
//! Provider clients for the upstream inference APIs and the request-level
//! orchestration built on top of them.

pub mod audio;
pub mod providers;
pub mod summarize;
