//! studentpages-sources — Where the datasets come from.
//!
//! Implements the `DataSource` trait over HTTP and over in-memory fixtures,
//! and loads the `studentpages.toml` configuration that points at them.

pub mod config;
pub mod fixture;
pub mod http;

pub use config::{load_config_from, StudentPagesConfig};
pub use fixture::StaticSource;
pub use http::HttpSource;
