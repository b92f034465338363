//! Data models for the weather history API.
//!
//! This module contains the wire shapes: the inbound query, the error
//! envelope, and the upstream provider responses that are decoded and
//! passed through to the caller.

pub mod api;
pub mod provider;

pub use api::*;
pub use provider::*;
