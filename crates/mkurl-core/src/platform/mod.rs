//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module.
//!
//! # Supported Platforms
//!
//! - **Windows**: `.url` internet shortcuts
//! - **macOS**: `.webloc` property lists
//! - **Everything else**: `.desktop` link entries (XDG)

pub mod permissions;

pub use permissions::set_executable;

use crate::config::ShortcutConfig;
use std::fmt;

/// Shortcut flavour selected by host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-style `.url` internet shortcut.
    Windows,
    /// Apple-style `.webloc` property list.
    Apple,
    /// XDG `.desktop` link entry, used on every other OS.
    Desktop,
}

impl Platform {
    /// Every variant, in a fixed order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Apple, Platform::Desktop];

    /// Returns the platform this binary was compiled for.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Platform::Apple
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Platform::Desktop
        }
    }

    /// File extension for this platform's shortcuts, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Platform::Windows => ShortcutConfig::WINDOWS_EXTENSION,
            Platform::Apple => ShortcutConfig::APPLE_EXTENSION,
            Platform::Desktop => ShortcutConfig::DESKTOP_EXTENSION,
        }
    }

    /// Short lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Apple => "macos",
            Platform::Desktop => "desktop",
        }
    }

    /// Whether written shortcuts must carry execute bits.
    pub fn needs_executable(self) -> bool {
        matches!(self, Platform::Desktop)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
