//! Internet shortcut creation.
//!
//! A [`Shortcut`] is rendered into exactly one of three fixed formats,
//! picked by [`Platform`]:
//! - `.url` internet shortcuts (Windows)
//! - `.webloc` property lists (macOS)
//! - `.desktop` link entries (everything else), made executable after writing
//!
//! # Example
//!
//! ```rust,no_run
//! use mkurl_core::{Shortcut, ShortcutWriter};
//!
//! fn main() -> mkurl_core::Result<()> {
//!     let shortcut = Shortcut::new("Example", "https://example.com")?;
//!     let path = ShortcutWriter::for_current_platform().write_to_current_dir(&shortcut)?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```

mod desktop_entry;
mod internet_shortcut;
mod webloc;

pub use desktop_entry::{DesktopEntry, DesktopEntryBuilder};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::UrlConfig;
use crate::error::{Result, ShortcutError};
use crate::platform::{self, Platform};

/// A validated name/URL pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// File base name and, for desktop entries, the display name.
    pub name: String,
    /// Target URL, stored verbatim.
    pub url: String,
}

impl Shortcut {
    /// Create a shortcut, rejecting an empty name or URL.
    ///
    /// The name is checked first.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let url = url.into();

        if name.is_empty() {
            return Err(ShortcutError::EmptyName);
        }
        if url.is_empty() {
            return Err(ShortcutError::EmptyUrl);
        }

        Ok(Self { name, url })
    }

    /// Whether the URL starts with `http://` or `https://`.
    pub fn has_web_scheme(&self) -> bool {
        has_web_scheme(&self.url)
    }

    /// File name this shortcut is written under on `platform`.
    pub fn file_name(&self, platform: Platform) -> String {
        format!("{}{}", self.name, platform.extension())
    }
}

/// Whether `url` starts with `http://` or `https://`.
///
/// This is the only URL check performed; it is case-sensitive.
pub fn has_web_scheme(url: &str) -> bool {
    UrlConfig::WEB_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Render the file body for `shortcut` in `platform`'s format.
pub fn render(platform: Platform, shortcut: &Shortcut) -> String {
    match platform {
        Platform::Windows => internet_shortcut::render(&shortcut.url),
        Platform::Apple => webloc::render(&shortcut.url),
        Platform::Desktop => DesktopEntry::web_link(&shortcut.name, &shortcut.url).to_string(),
    }
}

/// Writes shortcut files for one platform.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutWriter {
    platform: Platform,
}

impl ShortcutWriter {
    /// Create a writer producing `platform`'s format.
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Create a writer for the platform this binary was built for.
    pub fn for_current_platform() -> Self {
        Self::new(Platform::current())
    }

    /// The platform whose format this writer produces.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Write `shortcut` into `dir`, replacing any file of the same name.
    ///
    /// Returns the path of the written file. A failed write may leave a
    /// truncated file behind.
    pub fn write_to_dir(&self, dir: &Path, shortcut: &Shortcut) -> Result<PathBuf> {
        let path = dir.join(shortcut.file_name(self.platform));
        let content = render(self.platform, shortcut);

        let mut file = fs::File::create(&path).map_err(|e| ShortcutError::Open {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(content.as_bytes()).map_err(|e| ShortcutError::Io {
            message: "write shortcut file".to_string(),
            path: Some(path.clone()),
            source: Some(e),
        })?;

        file.flush().map_err(|e| ShortcutError::io_with_path(e, &path))?;
        drop(file);

        if self.platform.needs_executable() {
            platform::set_executable(&path)?;
        }

        debug!("Wrote {} shortcut to {:?}", self.platform, path);

        Ok(path)
    }

    /// Write `shortcut` into the process's current working directory.
    pub fn write_to_current_dir(&self, shortcut: &Shortcut) -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| ShortcutError::Io {
            message: format!("resolve current directory: {e}"),
            path: None,
            source: Some(e),
        })?;
        self.write_to_dir(&cwd, shortcut)
    }
}

/// Create a shortcut named `name` to `url` in the current directory.
///
/// Returns `false` on any failure, including empty input; the cause is logged.
pub fn create_shortcut(name: &str, url: &str) -> bool {
    let writer = ShortcutWriter::for_current_platform();
    let result = Shortcut::new(name, url).and_then(|s| writer.write_to_current_dir(&s));

    match result {
        Ok(path) => {
            info!("Created shortcut {}", path.display());
            true
        }
        Err(e) if e.is_invalid_input() => {
            debug!("Rejected shortcut input: {}", e);
            false
        }
        Err(e) => {
            warn!("Failed to create shortcut {:?}: {}", name, e);
            false
        }
    }
}
