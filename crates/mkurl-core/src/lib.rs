//! mkurl core - rendering and writing of internet shortcut files.
//!
//! This crate holds everything except the interactive front end: the
//! platform switch, the three file formats and the writer that puts them on
//! disk. The `mkurl` binary drives it from standard input.
//!
//! # Example
//!
//! ```rust,no_run
//! use mkurl_core::{Platform, Shortcut, ShortcutWriter};
//!
//! fn main() -> mkurl_core::Result<()> {
//!     let shortcut = Shortcut::new("Rust", "https://www.rust-lang.org")?;
//!     let writer = ShortcutWriter::new(Platform::current());
//!     let path = writer.write_to_current_dir(&shortcut)?;
//!     println!("Created {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod shortcut;

// Re-export commonly used types
pub use error::{Result, ShortcutError};
pub use platform::Platform;
pub use shortcut::{create_shortcut, has_web_scheme, render, Shortcut, ShortcutWriter};
