//! Centralized configuration for mkurl.
//!
//! Everything here is fixed at compile time; the tool reads no config files.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Internet Shortcut Creator";
    pub const TAGLINE: &'static str = "Creates a web link shortcut in the current folder.";
}

/// Shortcut file formats and their fixed fields.
pub struct ShortcutConfig;

impl ShortcutConfig {
    // File extensions, including the leading dot
    pub const WINDOWS_EXTENSION: &'static str = ".url";
    pub const APPLE_EXTENSION: &'static str = ".webloc";
    pub const DESKTOP_EXTENSION: &'static str = ".desktop";

    // Windows internet shortcut
    pub const INTERNET_SHORTCUT_ICON_INDEX: u32 = 1;

    // XDG desktop entry
    pub const DESKTOP_ENTRY_VERSION: &'static str = "1.0";
    pub const DESKTOP_ENTRY_TYPE: &'static str = "Link";
    pub const DESKTOP_ENTRY_ICON: &'static str = "text-html";
    pub const DESKTOP_COMMENT_PREFIX: &'static str = "Web shortcut to ";

    /// Execute bits for owner, group and others.
    pub const EXECUTE_BITS: u32 = 0o111;
}

/// URL checks.
pub struct UrlConfig;

impl UrlConfig {
    /// Prefixes a target URL is expected to start with.
    pub const WEB_SCHEMES: [&'static str; 2] = ["http://", "https://"];
}
