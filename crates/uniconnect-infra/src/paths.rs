//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `UNICONNECT_DATA_DIR` environment variable
/// 2. Home directory fallback: `~/.uniconnect`
/// 3. Last resort: `./.uniconnect`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("UNICONNECT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".uniconnect");
    }

    PathBuf::from(".uniconnect")
}
