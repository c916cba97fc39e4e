use anyhow::{Context, Result};
use pkengine_engine::Response;

/// Text for the terminal, or pretty JSON
pub fn render(response: &Response, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(response).context("Failed to serialize response")
    } else {
        Ok(response.to_string())
    }
}
