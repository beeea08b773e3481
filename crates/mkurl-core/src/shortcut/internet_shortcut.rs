//! Windows internet shortcut (.url) generation.

use crate::config::ShortcutConfig;

/// Render a `.url` file pointing at `url`.
///
/// The URL doubles as the icon source so Explorer shows the site's favicon.
pub fn render(url: &str) -> String {
    format!(
        "[InternetShortcut]\n\
         URL={url}\n\
         IconFile={url}\n\
         IconIndex={}\n",
        ShortcutConfig::INTERNET_SHORTCUT_ICON_INDEX
    )
}
