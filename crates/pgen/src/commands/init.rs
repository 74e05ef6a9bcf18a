use crate::{config::GeneratorConfig, Error, Result};
use pgen_cli_helpers::messages::success;
use std::path::Path;

/// Write a configuration file with the default settings.
pub fn run(path: impl AsRef<Path>, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(Error::FileExists(path.to_path_buf()));
    }
    let contents = GeneratorConfig::default().to_toml()?;
    std::fs::write(path, contents)?;
    success(format!("wrote {}", path.display()));
    Ok(())
}
