//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite database file can be created at startup.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Filesystem path behind a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding the database file exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        warn!(%database_url, "using in-memory database; plans will not survive restart");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    ensure_dir(dir).await?;
    info!(dir = %dir.display(), "database directory ready");
    Ok(())
}

async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_urls() {
        assert_eq!(sqlite_file_path("sqlite://japlan.db?mode=rwc"), Some(PathBuf::from("japlan.db")));
        assert_eq!(sqlite_file_path("sqlite:data/plans.db"), Some(PathBuf::from("data/plans.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://x"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("japlan-env-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/plans.db?mode=rwc", dir.display());
        ensure_env(&url).await?;
        assert!(dir.is_dir());
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
