use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::config::api_config;

static WEAVE_API_CLIENT: LazyLock<Result<reqwest::Client, reqwest::Error>> =
    LazyLock::new(|| reqwest::Client::builder().timeout(api_config().timeout).build());

/// HTTP client shared by every Weave API call.
pub fn weave_api_client() -> anyhow::Result<&'static reqwest::Client> {
    WEAVE_API_CLIENT
        .as_ref()
        .map_err(|e| anyhow::anyhow!("failed to build Weave API client: {e}"))
}

/// Value of the `Authorization` header the Weave API expects.
pub fn authorization_header(token: &str) -> String {
    format!("Token {token}")
}

pub async fn weave_api_get<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
    token: Option<&str>,
) -> anyhow::Result<T> {
    let url = api_config().url_for(path);
    let client = weave_api_client()?;

    let t0 = std::time::Instant::now();
    let mut request = client.get(&url).query(params);
    if let Some(token) = token {
        request = request.header(reqwest::header::AUTHORIZATION, authorization_header(token));
    }
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!("WEAVE API {path}: {status} after {dt_ms}ms");
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!("WEAVE API {path}: {status}, len = {} ({dt_ms}ms)", response_txt.len());

    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_uses_token_scheme() {
        assert_eq!(authorization_header("abc-123"), "Token abc-123");
    }

    #[test]
    fn client_is_built_once() {
        let first = weave_api_client().unwrap();
        let second = weave_api_client().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
