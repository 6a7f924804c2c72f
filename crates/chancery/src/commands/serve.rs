//! `chancery serve` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use chancery_config::{CliSettings, Config};
use chancery_server::run_server;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover chancery.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Public site base URL (overrides config).
    #[arg(long)]
    site_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable the persistent page cache (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable the persistent page cache.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cache_enabled = if self.no_cache { Some(false) } else { self.cache };

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            cache_enabled,
            site_base_url: self.site_url,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Ensure project directory exists with .gitignore
        ensure_project_dir(&config.cache_resolved.project_dir)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Content Store: {}", config.content.api_base()));
        output.info(&format!("Site URL: {}", config.site.base_url));
        if config.cache_resolved.enabled {
            output.info(&format!(
                "Page cache: {}",
                config.cache_resolved.cache_dir().display()
            ));
        } else {
            output.info("Page cache: disabled");
        }

        run_server(&config, version)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        output.success("Server stopped");
        Ok(())
    }
}

/// Create the project directory and make sure it is git-ignored.
fn ensure_project_dir(project_dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(project_dir)?;

    let gitignore = project_dir.join(".gitignore");
    if !gitignore.exists() {
        fs::write(&gitignore, "*\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_project_dir_creates_gitignore() {
        let tmp = tempfile::TempDir::new().unwrap();
        let project_dir = tmp.path().join(".chancery");

        ensure_project_dir(&project_dir).unwrap();

        assert!(project_dir.is_dir());
        assert_eq!(
            fs::read_to_string(project_dir.join(".gitignore")).unwrap(),
            "*\n"
        );
    }

    #[test]
    fn test_ensure_project_dir_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let project_dir = tmp.path().join(".chancery");

        ensure_project_dir(&project_dir).unwrap();
        ensure_project_dir(&project_dir).unwrap();

        assert!(project_dir.is_dir());
    }
}
