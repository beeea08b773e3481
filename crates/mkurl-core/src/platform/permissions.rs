//! Platform-specific file permission handling.

use crate::error::{Result, ShortcutError};
use std::path::Path;
use tracing::debug;

/// Make a file executable for owner, group and others.
///
/// # Platform Behavior
/// - **Unix**: Adds the execute bits (`chmod a+x`), other bits are kept
/// - **Windows**: No-op (Windows determines executability by file extension)
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use crate::config::ShortcutConfig;
        use std::os::unix::fs::PermissionsExt;

        let metadata =
            std::fs::metadata(path).map_err(|e| ShortcutError::io_with_path(e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | ShortcutConfig::EXECUTE_BITS);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| ShortcutError::io_with_path(e, path))?;
        debug!("Set executable permissions on: {}", path.display());
    }

    #[cfg(not(unix))]
    {
        if !path.exists() {
            return Err(ShortcutError::io_with_path(
                std::io::Error::from(std::io::ErrorKind::NotFound),
                path,
            ));
        }
        debug!("Skipping executable bit for: {}", path.display());
    }

    Ok(())
}

/// Check if a file is executable by everyone.
///
/// # Platform Behavior
/// - **Unix**: Checks that the owner, group and other execute bits are all set
/// - **Windows**: Always false, there are no execute bits to inspect
#[cfg(test)]
pub(crate) fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use crate::config::ShortcutConfig;
        use std::os::unix::fs::PermissionsExt;

        let bits = ShortcutConfig::EXECUTE_BITS;
        std::fs::metadata(path)
            .map(|m| m.permissions().mode() & bits == bits)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        false
    }
}
