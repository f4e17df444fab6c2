use std::env::VarError;
use std::fmt;

use crate::error::{FetchError, FetchResult};

use super::EnvMap;

pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
pub const COOKIE_STRING_VAR: &str = "COOKIE_STRING";

/// Credential presented to the settings endpoint. Exactly one is chosen per run.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    BearerToken(String),
    CookieHeader(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Bearer,
    Cookie,
}

impl Credential {
    pub fn mode(&self) -> AuthMode {
        match self {
            Credential::BearerToken(_) => AuthMode::Bearer,
            Credential::CookieHeader(_) => AuthMode::Cookie,
        }
    }
}

impl AuthMode {
    pub fn describe(self) -> &'static str {
        match self {
            AuthMode::Bearer => "Using Authorization: Bearer <ACCESS_TOKEN>",
            AuthMode::Cookie => "Using Cookie header from COOKIE_STRING",
        }
    }
}

// Secrets never reach logs through Debug.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
            Credential::CookieHeader(_) => f.write_str("CookieHeader(<redacted>)"),
        }
    }
}

/// Picks the credential for this run. A non-blank `ACCESS_TOKEN` always wins
/// over `COOKIE_STRING`; values are passed through untouched.
pub fn resolve_credential(env: &EnvMap) -> FetchResult<Credential> {
    match (usable(env, ACCESS_TOKEN_VAR), usable(env, COOKIE_STRING_VAR)) {
        (Some(token), _) => Ok(Credential::BearerToken(token.to_string())),
        (None, Some(cookie)) => Ok(Credential::CookieHeader(cookie.to_string())),
        (None, None) => Err(FetchError::MissingCredential),
    }
}

/// Reads both credential variables through `lookup` (normally
/// `std::env::var`). Unset variables are skipped; a value that is not UTF-8
/// is reported instead of being treated as absent.
pub fn read_credential_vars<F>(lookup: F) -> FetchResult<EnvMap>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut env = EnvMap::new();
    for var in [ACCESS_TOKEN_VAR, COOKIE_STRING_VAR] {
        match lookup(var) {
            Ok(value) => {
                env.insert(var.to_string(), value);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(_)) => return Err(FetchError::NotUnicode { var }),
        }
    }
    Ok(env)
}

fn usable<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}
