//! Tests for `create_shortcut`, which writes into the process's current
//! directory. Kept in its own test binary so changing the working directory
//! cannot race with other tests.

use std::fs;

use mkurl_core::{create_shortcut, render, Platform, Shortcut};
use tempfile::TempDir;

#[test]
fn test_create_shortcut_writes_into_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let created = create_shortcut("Example", "https://example.com");
    let rejected = create_shortcut("", "https://example.com");

    std::env::set_current_dir(previous).unwrap();

    assert!(created);
    assert!(!rejected);

    let platform = Platform::current();
    let path = temp_dir.path().join(format!("Example{}", platform.extension()));
    let content = fs::read_to_string(&path).unwrap();

    let expected = Shortcut::new("Example", "https://example.com").unwrap();
    assert_eq!(content, render(platform, &expected));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use std::os::unix::fs::PermissionsExt;

        assert_eq!(
            content,
            "[Desktop Entry]\n\
             Version=1.0\n\
             Type=Link\n\
             Name=Example\n\
             Comment=Web shortcut to https://example.com\n\
             URL=https://example.com\n\
             Icon=text-html\n"
        );
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
