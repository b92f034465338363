//! HTTP request handlers for API endpoints.

pub mod app;
pub mod health;
pub mod history;
pub mod version;

pub use app::*;
pub use health::*;
pub use history::*;
pub use version::*;
