//! Untrusted-content processing for an online-judge platform client.
//!
//! Three independent, stateless components, each consuming one piece of
//! untrusted input and producing a safety/render verdict:
//!
//! - [`markdown_to_html`] - user-authored markdown (with math and code)
//!   rendered to sanitized HTML with deterministic heading anchors
//! - [`contains_os_artifacts`] - uploaded ZIP archives scanned for
//!   desktop-OS packaging debris without extracting payloads
//! - [`contains_invisible`], [`strip_markdown`] - free-text checks for
//!   invisible characters and plain-text previews
//!
//! The components share no runtime state and never call one another; every
//! function returns a usable value under all input conditions.

pub mod archive;
pub mod config;
pub mod error;
pub mod markdown;
pub mod text;

pub use archive::{contains_os_artifacts, scan_entries};
pub use config::ScanRules;
pub use error::ArchiveError;
pub use markdown::{markdown_to_html, slugify};
pub use text::{contains_invisible, excerpt, strip_invisible, strip_markdown};
