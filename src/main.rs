use std::sync::Arc;

use bedrock_chat::defaults;
use bedrock_chat::prelude::*;
use bedrock_chat::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init_from_env()?;

    let mut config = BedrockConfig::new();
    match std::env::var(defaults::bedrock::BEARER_TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => config = config.with_api_key(token),
        _ => tracing::warn!(
            "{} is not set; requests will be rejected by Bedrock",
            defaults::bedrock::BEARER_TOKEN_ENV
        ),
    }

    let client = BedrockClient::new(config)?;
    tracing::info!(url = %client.invoke_url(), "using Bedrock model");

    ChatServer::new(ServerConfig::default(), Arc::new(client))
        .serve()
        .await?;
    Ok(())
}
