//! Data types shared across the crate.

pub mod generation;
pub mod http;
pub mod titan;

pub use generation::TextGenerationConfig;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use titan::{TitanRequest, TitanResponse, TitanResult};
