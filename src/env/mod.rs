use std::collections::HashMap;

pub type EnvMap = HashMap<String, String>;

mod credential;
#[cfg(feature = "cli")]
mod loader;

pub use credential::{
    read_credential_vars, resolve_credential, AuthMode, Credential, ACCESS_TOKEN_VAR,
    COOKIE_STRING_VAR,
};
#[cfg(feature = "cli")]
pub use loader::{load_env_file_sync, load_environment};
