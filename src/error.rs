use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no usable credential: set ACCESS_TOKEN or COOKIE_STRING")]
    MissingCredential,

    #[error("{var} is set but is not valid UTF-8")]
    NotUnicode { var: &'static str },

    #[error("{header} header value is not valid")]
    InvalidHeader {
        header: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("invalid base URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Settings(String),

    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// True for failures raised before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FetchError::MissingCredential
                | FetchError::NotUnicode { .. }
                | FetchError::InvalidHeader { .. }
                | FetchError::InvalidUrl { .. }
                | FetchError::Settings(_)
        )
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
