//! Apple `.webloc` property list generation.

/// Render a `.webloc` property list holding a single `URL` key.
///
/// The URL is inserted as-is; callers wanting strict XML must escape it first.
pub fn render(url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>URL</key>
	<string>{url}</string>
</dict>
</plist>
"#
    )
}
