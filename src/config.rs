//! Library configuration.
//!
//! Centralizes the fixed classification tables and sanitizer allow-lists
//! used throughout the crate, so detection data can be updated without
//! touching the scan or render logic.

use serde::Deserialize;

// =============================================================================
// Archive Scan Configuration
// =============================================================================

/// Directory names emitted by desktop operating systems that should never
/// appear inside a judge-submitted or resource archive.
pub const JUNK_FOLDER_NAMES: &[&str] = &[
    "__MACOSX",
    ".Trashes",
    ".Spotlight-V100",
    ".fseventsd",
    ".TemporaryItems",
    ".AppleDouble",
    "$RECYCLE.BIN",
    "System Volume Information",
];

/// Metadata sidecar files emitted by desktop operating systems.
pub const JUNK_FILE_NAMES: &[&str] = &[
    ".DS_Store",
    ".localized",
    "Thumbs.db",
    "ehthumbs.db",
    "desktop.ini",
];

/// Basename prefixes marking resource-fork sidecars (`._name` companions
/// written by macOS next to every file in a non-HFS archive).
pub const JUNK_FILE_PREFIXES: &[&str] = &["._"];

/// Classification tables for the archive scanner.
///
/// Defaults to the built-in tables above. Deployments can replace a table
/// from configuration data via [`ScanRules::from_toml_str`]; a field left
/// out of the TOML keeps its built-in value.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanRules {
    /// Directory names that mark an entry as suspect wherever they appear
    /// in its path.
    pub junk_folders: Vec<String>,
    /// Basenames that mark an entry as suspect on exact match.
    pub junk_files: Vec<String>,
    /// Basename prefixes that mark an entry as suspect.
    pub junk_prefixes: Vec<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            junk_folders: JUNK_FOLDER_NAMES.iter().map(|s| s.to_string()).collect(),
            junk_files: JUNK_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            junk_prefixes: JUNK_FILE_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanRules {
    /// Load rules from a TOML document.
    ///
    /// ```toml
    /// junk_files = [".DS_Store", "Thumbs.db", "npm-debug.log"]
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Whether a path segment matches the junk-folder table.
    pub fn is_junk_folder(&self, segment: &str) -> bool {
        self.junk_folders.iter().any(|name| name == segment)
    }

    /// Whether a basename matches the junk-file table.
    pub fn is_junk_file(&self, basename: &str) -> bool {
        self.junk_files.iter().any(|name| name == basename)
    }

    /// Whether a basename starts with a junk prefix.
    pub fn has_junk_prefix(&self, basename: &str) -> bool {
        self.junk_prefixes
            .iter()
            .any(|prefix| basename.starts_with(prefix.as_str()))
    }
}

// =============================================================================
// Text Sanitation Configuration
// =============================================================================

/// Character class matching invisible input: the Unicode "Other" categories
/// (control, format, unassigned, private use) plus the named zero-width and
/// spacing characters commonly used for steganographic or homoglyph payloads
/// (NBSP, ZWSP, ZWNJ, ZWJ, word joiner, BOM).
pub const INVISIBLE_CHAR_PATTERN: &str =
    r"[\p{C}\u{00A0}\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}]";

// =============================================================================
// Sanitizer Allow-Lists
// =============================================================================

/// Elements whose `id` attribute survives sanitization: headings (anchor
/// targets) and `div` (footnote definitions).
pub const ID_CARRYING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "div"];

/// Elements whose `class` attribute survives sanitization wholesale.
///
/// The highlighter's class vocabulary is open-ended (syntax scope names), so
/// classes on these wrapper elements are kept rather than enumerated.
pub const CLASS_CARRYING_TAGS: &[&str] = &["span", "div", "code", "pre", "sup"];

/// MathML elements produced by the math engine.
pub const MATHML_TAGS: &[&str] = &[
    "math",
    "semantics",
    "annotation",
    "mrow",
    "mi",
    "mo",
    "mn",
    "ms",
    "mtext",
    "mspace",
    "msup",
    "msub",
    "msubsup",
    "mfrac",
    "msqrt",
    "mroot",
    "mstyle",
    "merror",
    "mpadded",
    "mphantom",
    "munder",
    "mover",
    "munderover",
    "mmultiscripts",
    "mprescripts",
    "mtable",
    "mtr",
    "mtd",
];

/// Per-element MathML attributes to retain.
pub const MATHML_TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("math", &["xmlns", "display"]),
    ("annotation", &["encoding"]),
    ("mo", &["stretchy", "fence", "separator", "form", "lspace", "rspace"]),
    ("mspace", &["width", "height", "depth"]),
    ("mfrac", &["linethickness"]),
    ("mstyle", &["displaystyle", "scriptlevel"]),
    ("mpadded", &["width", "lspace", "voffset"]),
    ("mtable", &["columnalign", "rowalign"]),
    ("mtd", &["columnalign"]),
];
