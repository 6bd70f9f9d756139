use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum Setup {
    /// Everything already existed; the run can go ahead.
    Ready,
    /// The ingest directory or target list was just created. Re-run required.
    Created,
}

/// Create missing directories and the target list. A fresh install never
/// processes anything on its first invocation.
pub fn prepare(config: &Config) -> Result<Setup> {
    let mut setup = Setup::Ready;

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating {}", config.output_dir.display()))?;
    }

    if !config.ingest_dir.exists() {
        fs::create_dir_all(&config.ingest_dir)
            .with_context(|| format!("creating {}", config.ingest_dir.display()))?;
        info!("Created ingest directory {}", config.ingest_dir.display());
        setup = Setup::Created;
    }

    if !config.targets_path.exists() {
        fs::File::create(&config.targets_path)
            .with_context(|| format!("creating {}", config.targets_path.display()))?;
        info!("Created empty target list {}", config.targets_path.display());
        setup = Setup::Created;
    }

    Ok(setup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_creates_then_second_is_ready() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_root(dir.path());

        assert_eq!(prepare(&config).unwrap(), Setup::Created);
        assert!(config.output_dir.is_dir());
        assert!(config.ingest_dir.is_dir());
        assert_eq!(fs::read_to_string(&config.targets_path).unwrap(), "");

        assert_eq!(prepare(&config).unwrap(), Setup::Ready);
    }

    #[test]
    fn missing_output_dir_alone_does_not_force_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_root(dir.path());
        fs::create_dir_all(&config.ingest_dir).unwrap();
        fs::write(&config.targets_path, "MTH101\n").unwrap();

        assert_eq!(prepare(&config).unwrap(), Setup::Ready);
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn missing_target_list_forces_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_root(dir.path());
        fs::create_dir_all(&config.ingest_dir).unwrap();

        assert_eq!(prepare(&config).unwrap(), Setup::Created);
        assert!(config.targets_path.is_file());
    }
}
