use reqwest::{
    header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, COOKIE},
    Client, Request,
};
use tracing::debug;

use crate::config::ClientSettings;
use crate::env::Credential;
use crate::error::{FetchError, FetchResult};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_client(settings: &ClientSettings) -> FetchResult<Client> {
    Client::builder()
        .connect_timeout(settings.connect_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| FetchError::Transport {
            url: settings.base_url.to_string(),
            source,
        })
}

/// Builds the GET for the settings endpoint. Only the header matching the
/// credential variant is attached.
pub fn build_request(
    client: &Client,
    settings: &ClientSettings,
    credential: &Credential,
) -> FetchResult<Request> {
    let url = settings.endpoint()?;
    let (name, value) = auth_header(credential)?;
    debug!(%url, mode = ?credential.mode(), "building request");

    client
        .get(url.clone())
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .header(name, value)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
}

fn auth_header(credential: &Credential) -> FetchResult<(HeaderName, HeaderValue)> {
    let (name, label, raw) = match credential {
        Credential::BearerToken(token) => {
            (AUTHORIZATION, "Authorization", format!("Bearer {token}"))
        }
        Credential::CookieHeader(cookie) => (COOKIE, "Cookie", cookie.clone()),
    };
    let mut value = HeaderValue::from_str(&raw).map_err(|source| FetchError::InvalidHeader {
        header: label,
        source,
    })?;
    value.set_sensitive(true);
    Ok((name, value))
}
