//! Amazon Bedrock runtime standard for Titan Text models.

pub mod errors;
pub mod titan;

pub use errors::classify_bedrock_http_error;
pub use titan::TitanTextStandard;
