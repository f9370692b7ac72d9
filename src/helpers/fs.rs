//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/component-gallery/` or `$XDG_CONFIG_HOME/component-gallery/`
/// - **macOS**: `~/Library/Application Support/dev.gallery.component-gallery/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\gallery\component-gallery\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "gallery", "component-gallery") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_created() {
        let dir = get_or_create_config_dir().expect("resolve config dir");
        assert!(dir.exists());
    }
}
