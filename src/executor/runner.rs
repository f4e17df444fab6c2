use std::time::Instant;

use reqwest::{Client, Request};
use tracing::debug;

use crate::config::ClientSettings;
use crate::env::Credential;
use crate::error::{FetchError, FetchResult};

use super::{
    models::HttpResult,
    request::{build_client, build_request},
};

/// Builds and sends the settings request once. No retries.
pub async fn fetch_settings(
    settings: &ClientSettings,
    credential: &Credential,
) -> FetchResult<HttpResult> {
    let client = build_client(settings)?;
    let request = build_request(&client, settings, credential)?;
    send_request(&client, request).await
}

pub async fn send_request(client: &Client, request: Request) -> FetchResult<HttpResult> {
    let url = request.url().to_string();
    let start = Instant::now();

    let response = client
        .execute(request)
        .await
        .map_err(|source| classify(source, &url))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|source| classify(source, &url))?;

    debug!(
        status,
        body_bytes = body.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "response received"
    );

    Ok(HttpResult { status, body })
}

fn classify(source: reqwest::Error, url: &str) -> FetchError {
    let url = url.to_string();
    if source.is_timeout() {
        FetchError::Timeout { url, source }
    } else if source.is_connect() {
        FetchError::Connect { url, source }
    } else {
        FetchError::Transport { url, source }
    }
}
