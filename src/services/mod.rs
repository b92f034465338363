//! Business logic and service layer modules.
//!
//! The request pipeline lives here: credential loading, location
//! resolution via the autocomplete upstream, and history fetching.

pub mod credentials;
pub mod history;
pub mod location;

pub use credentials::*;
pub use history::*;
pub use location::*;
