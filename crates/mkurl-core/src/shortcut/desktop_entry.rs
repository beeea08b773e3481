//! Desktop entry (.desktop file) generation.
//!
//! Produces XDG `Type=Link` entries, which file managers open in the
//! default browser.

use std::fmt::Write as FmtWrite;

use crate::config::ShortcutConfig;

/// A link-type desktop entry.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Desktop entry spec version.
    pub version: String,
    /// Entry type, `Link` for web shortcuts.
    pub entry_type: String,
    /// Entry name (shown by the file manager).
    pub name: String,
    /// Comment/description.
    pub comment: Option<String>,
    /// Target URL.
    pub url: String,
    /// Icon name or path.
    pub icon: String,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            version: ShortcutConfig::DESKTOP_ENTRY_VERSION.to_string(),
            entry_type: ShortcutConfig::DESKTOP_ENTRY_TYPE.to_string(),
            name: String::new(),
            comment: None,
            url: String::new(),
            icon: ShortcutConfig::DESKTOP_ENTRY_ICON.to_string(),
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Entry for a web shortcut named `name` pointing at `url`.
    pub fn web_link(name: &str, url: &str) -> Self {
        Self::builder()
            .name(name)
            .comment(format!("{}{url}", ShortcutConfig::DESKTOP_COMMENT_PREFIX))
            .url(url)
            .build()
    }

    /// Generate the .desktop file content.
    pub fn to_string(&self) -> String {
        let mut content = String::new();

        writeln!(content, "[Desktop Entry]").unwrap();
        writeln!(content, "Version={}", self.version).unwrap();
        writeln!(content, "Type={}", self.entry_type).unwrap();
        writeln!(content, "Name={}", self.name).unwrap();

        if let Some(ref comment) = self.comment {
            writeln!(content, "Comment={}", comment).unwrap();
        }

        writeln!(content, "URL={}", self.url).unwrap();

        if !self.icon.is_empty() {
            writeln!(content, "Icon={}", self.icon).unwrap();
        }

        content
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.entry.comment = Some(comment.into());
        self
    }

    /// Set the target URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.entry.url = url.into();
        self
    }

    /// Set the icon. An empty icon omits the `Icon=` line.
    #[cfg(test)]
    pub(crate) fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = icon.into();
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
