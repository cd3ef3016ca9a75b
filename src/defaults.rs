//! Default values shared by configuration types.

/// Amazon Bedrock runtime defaults.
pub mod bedrock {
    pub const REGION: &str = "us-east-1";
    pub const MODEL_ID: &str = "amazon.titan-text-express-v1";
    /// Environment variable the binary reads the Bedrock API key from.
    pub const BEARER_TOKEN_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";

    /// Runtime endpoint for a region.
    pub fn runtime_base_url(region: &str) -> String {
        format!("https://bedrock-runtime.{region}.amazonaws.com")
    }
}

/// Titan Text generation defaults.
pub mod generation {
    pub const MAX_TOKEN_COUNT: u32 = 256;
    pub const TEMPERATURE: f64 = 0.7;
    pub const TOP_P: f64 = 1.0;
}

pub mod http {
    use std::time::Duration;

    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &str = concat!("bedrock-chat/", env!("CARGO_PKG_VERSION"));
}

/// Web form defaults.
pub mod server {
    use std::net::{IpAddr, Ipv4Addr};

    pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    pub const PORT: u16 = 7860;
    pub const TITLE: &str = "Bedrock Chatbot";
    pub const DESCRIPTION: &str = "Ask a question and get a response from Amazon Bedrock";
    pub const GENERIC_ERROR: &str = "Something went wrong while generating a response.";
}
