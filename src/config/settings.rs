use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{FetchError, FetchResult};

use super::loader::SettingsFile;

pub const USER_SETTINGS_PATH: &str = "/userprofile-service/userprofile/user-settings";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Known deployment hosts. Never picked automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Region {
    #[default]
    Global,
    China,
}

impl Region {
    pub fn base_url(self) -> &'static str {
        match self {
            Region::Global => "https://connectapi.garmin.com",
            Region::China => "https://connectapi.garmin.cn",
        }
    }
}

/// Immutable request settings, passed explicitly to the request builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: Url,
    pub path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn for_region(region: Region) -> Self {
        Self {
            base_url: Url::parse(region.base_url()).expect("region presets are valid URLs"),
            path: USER_SETTINGS_PATH.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Layers `overrides` onto defaults, lowest priority first. Within one
    /// layer an explicit base URL beats a region preset.
    pub fn resolve<'a, I>(layers: I) -> FetchResult<Self>
    where
        I: IntoIterator<Item = &'a SettingsFile>,
    {
        let mut settings = Self::default();
        for layer in layers {
            if let Some(raw) = &layer.base_url {
                settings.base_url = parse_base_url(raw)?;
            } else if let Some(region) = layer.region {
                settings.base_url = parse_base_url(region.base_url())?;
            }
            if let Some(secs) = layer.connect_timeout_secs {
                settings.connect_timeout = positive_secs("connect timeout", secs)?;
            }
            if let Some(secs) = layer.request_timeout_secs {
                settings.request_timeout = positive_secs("request timeout", secs)?;
            }
        }
        Ok(settings)
    }

    /// Full URL of the settings resource. A path prefix on the base URL is kept.
    pub fn endpoint(&self) -> FetchResult<Url> {
        let raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), self.path);
        Url::parse(&raw).map_err(|source| FetchError::InvalidUrl { url: raw, source })
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::for_region(Region::default())
    }
}

fn parse_base_url(raw: &str) -> FetchResult<Url> {
    let url = Url::parse(raw).map_err(|source| FetchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::Settings(format!(
                "base URL {raw} must use http or https, not {other}"
            )))
        }
    }
    // The resource path is appended to the base, so nothing may follow it.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(FetchError::Settings(format!(
            "base URL {raw} must not carry a query or fragment"
        )));
    }
    Ok(url)
}

fn positive_secs(label: &str, secs: u64) -> FetchResult<Duration> {
    if secs == 0 {
        return Err(FetchError::Settings(format!(
            "{label} must be greater than zero"
        )));
    }
    Ok(Duration::from_secs(secs))
}
