use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::env::EnvMap;

/// Merges the entries of a dotenv file into `env`.
pub fn load_env_file_sync(path: &Path, env: &mut EnvMap) -> Result<PathBuf> {
    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("reading env file {}", path.display()))?;

    for entry in entries {
        let (key, value) =
            entry.with_context(|| format!("parsing env file {}", path.display()))?;
        env.insert(key, value);
    }

    Ok(path.to_path_buf())
}

/// Builds the variable map credentials are resolved from. Values in the
/// process environment override anything read from `env_file`.
pub fn load_environment<I>(env_file: Option<&Path>, process: I) -> Result<EnvMap>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env = EnvMap::new();
    if let Some(path) = env_file {
        let loaded = load_env_file_sync(path, &mut env)?;
        debug!(path = %loaded.display(), "loaded env file");
    }
    env.extend(process);
    Ok(env)
}
