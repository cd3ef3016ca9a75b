//! Provider wire standards.

pub mod bedrock;
