//! Configuration structures and loading utilities.
//!
//! Each structure loads from environment variables with fixed defaults,
//! so the service runs unconfigured against the real upstreams and can be
//! pointed at stubs in tests.

pub mod secrets;
pub mod upstream;

pub use secrets::*;
pub use upstream::*;
