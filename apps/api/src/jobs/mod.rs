//! Job-search proxy: normalized listings from an external provider.

pub mod client;
pub mod handlers;
pub mod types;
