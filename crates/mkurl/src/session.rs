//! The interactive dialogue: banner, two prompts, one write, one report.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use mkurl_core::config::{AppConfig, UrlConfig};
use mkurl_core::{Shortcut, ShortcutError, ShortcutWriter};
use tracing::{debug, info};

use crate::prompt;

pub const NAME_PROMPT: &str = "Enter Shortcut Name: ";
pub const URL_PROMPT: &str = "Enter Target URL: ";

/// Run one dialogue, writing the shortcut into `dir`, and return the exit status.
///
/// Input problems and write failures are reported on `err` and turned into a
/// non-zero status. Only I/O errors on the terminal streams are returned.
pub fn run<R, W, E>(
    input: &mut R,
    out: &mut W,
    err: &mut E,
    writer: ShortcutWriter,
    dir: &Path,
) -> Result<u8>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "=== {} ===", AppConfig::APP_NAME)?;
    writeln!(out, "{}", AppConfig::TAGLINE)?;

    let name = prompt::read_line(input, out, NAME_PROMPT)?;
    if name.is_empty() {
        return reject(err, &ShortcutError::EmptyName);
    }

    let url = prompt::read_line(input, out, URL_PROMPT)?;
    let shortcut = match Shortcut::new(name, url) {
        Ok(shortcut) => shortcut,
        Err(e) => return reject(err, &e),
    };

    if !shortcut.has_web_scheme() {
        writeln!(
            err,
            "Warning: URL does not start with {}. The shortcut may not open in a browser.",
            UrlConfig::WEB_SCHEMES.join(" or ")
        )?;
    }

    debug!("Writing {} shortcut into {}", writer.platform(), dir.display());

    match writer.write_to_dir(dir, &shortcut) {
        Ok(path) => {
            info!("Created shortcut {}", path.display());
            writeln!(out, "Shortcut created successfully.")?;
            writeln!(out, "File: {}", shortcut.file_name(writer.platform()))?;
            writeln!(out, "Location: {}", dir.display())?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "Error: Failed to create the shortcut. {e}")?;
            Ok(e.exit_code())
        }
    }
}

fn reject<E: Write>(err: &mut E, cause: &ShortcutError) -> Result<u8> {
    writeln!(err, "Error: {cause}")?;
    Ok(cause.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkurl_core::Platform;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Transcript {
        code: u8,
        out: String,
        err: String,
    }

    fn dialogue(input: &str, platform: Platform, dir: &Path) -> Transcript {
        let mut input = Cursor::new(input.to_string());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            &mut input,
            &mut out,
            &mut err,
            ShortcutWriter::new(platform),
            dir,
        )
        .unwrap();

        Transcript {
            code,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_successful_dialogue() {
        let temp_dir = TempDir::new().unwrap();
        let t = dialogue(
            "Example\nhttps://example.com\n",
            Platform::Desktop,
            temp_dir.path(),
        );

        assert_eq!(t.code, 0);
        assert!(t.out.starts_with("=== Internet Shortcut Creator ===\n"));
        assert!(t.out.contains(NAME_PROMPT));
        assert!(t.out.contains(URL_PROMPT));
        assert!(t.out.contains("Shortcut created successfully."));
        assert!(t.out.contains("File: Example.desktop"));
        assert!(t.out.contains(&format!("Location: {}", temp_dir.path().display())));
        assert!(t.err.is_empty());

        let content =
            std::fs::read_to_string(temp_dir.path().join("Example.desktop")).unwrap();
        assert!(content.contains("Name=Example\n"));
        assert!(content.contains("URL=https://example.com\n"));
    }

    #[test]
    fn test_empty_name_stops_before_url_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let t = dialogue("\nhttps://example.com\n", Platform::Windows, temp_dir.path());

        assert_eq!(t.code, 1);
        assert_eq!(t.err, "Error: Shortcut name cannot be empty.\n");
        assert!(!t.out.contains(URL_PROMPT));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_url() {
        let temp_dir = TempDir::new().unwrap();
        let t = dialogue("Example\n\n", Platform::Apple, temp_dir.path());

        assert_eq!(t.code, 1);
        assert_eq!(t.err, "Error: URL cannot be empty.\n");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_scheme_warns_but_writes() {
        let temp_dir = TempDir::new().unwrap();
        let t = dialogue("Example\nexample.com\n", Platform::Windows, temp_dir.path());

        assert_eq!(t.code, 0);
        assert!(t.err.starts_with("Warning: URL does not start with http:// or https://."));

        let content = std::fs::read_to_string(temp_dir.path().join("Example.url")).unwrap();
        assert!(content.contains("URL=example.com\n"));
    }

    #[test]
    fn test_write_failure_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        let t = dialogue("Example\nhttps://example.com\n", Platform::Desktop, &missing);

        assert_eq!(t.code, 1);
        assert!(t.err.starts_with("Error: Failed to create the shortcut."));
        assert!(!t.out.contains("Shortcut created successfully."));
    }
}
