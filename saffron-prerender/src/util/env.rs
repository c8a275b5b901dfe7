use anyhow::{Context, Result};
use std::env;
use std::path::Path;

/// Environment variable naming an explicit `.env` file
pub const SAFFRON_ENV_FILE: &str = "SAFFRON_ENV_FILE";

/// Default paths to check for prerender configuration
pub const DEFAULT_PATHS: &[&str] = &["./.env", "$HOME/.config/saffron-tree/prerender.env"];

/// Load environment variables from the first configuration file found.
///
/// An explicitly named file must exist. The default locations are optional,
/// so `Ok(None)` means flags and the process environment are all there is.
pub fn load_env() -> Result<Option<String>> {
    if let Ok(env_file) = env::var(SAFFRON_ENV_FILE) {
        let path = expand(&env_file);
        load_from_path(&path).context(format!("Failed to load environment from {}", path))?;
        return Ok(Some(path));
    }

    for path in DEFAULT_PATHS {
        let expanded_path = expand(path);
        if Path::new(&expanded_path).exists() {
            load_from_path(&expanded_path)
                .context(format!("Failed to load environment from {}", expanded_path))?;
            return Ok(Some(expanded_path));
        }
    }

    Ok(None)
}

fn expand(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load environment variables from a specific path
fn load_from_path(path: &str) -> Result<()> {
    dotenv::from_path(path).context(format!("Failed to load .env file from {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_leaves_plain_paths_alone() {
        assert_eq!(expand("./site.env"), "./site.env");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        assert!(load_from_path("/definitely/not/here/site.env").is_err());
    }
}
