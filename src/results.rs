use serde::{Deserialize, Serialize};
use std::fmt;

/// The SEO fields tracked for every page, in comparison order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Robots,
    Canonical,
    Keywords,
}

impl Field {
    /// All fields in the order they are compared and reported
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Robots,
        Field::Canonical,
        Field::Keywords,
    ];

    /// Lower-case field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Robots => "robots",
            Field::Canonical => "canonical",
            Field::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SEO metadata extracted from one fetched page.
///
/// Every field is a plain string; an empty string means the element or
/// attribute was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Trimmed text of the first `<title>` element
    pub title: String,

    /// `content` of the last `<meta name="description">`
    pub description: String,

    /// `content` of the last `<meta name="robots">`
    pub robots: String,

    /// `href` of the last `<link rel="canonical">`
    pub canonical: String,

    /// Lower-cased, comma-joined keywords gathered from LD+JSON blocks
    pub keywords: String,
}

impl MetadataRecord {
    /// Value of a single field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Robots => &self.robots,
            Field::Canonical => &self.canonical,
            Field::Keywords => &self.keywords,
        }
    }
}

/// A single human-readable difference between two pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Canonical-only mode: at least one side has no canonical link
    CanonicalMissing,

    /// Canonical-only mode: both canonicals present but different
    CanonicalMismatch { source: String, target: String },

    /// Full mode: a field differs
    FieldMismatch {
        field: Field,
        source: String,
        target: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::CanonicalMissing => write!(f, "Canonical missing on one or both URLs"),
            Finding::CanonicalMismatch { source, target } => {
                write!(f, "CANONICAL MISMATCH: Source: {source} | Target: {target}")
            }
            Finding::FieldMismatch {
                field,
                source,
                target,
            } => write!(
                f,
                "{}: Source: {source} | Target: {target}",
                field.name().to_uppercase()
            ),
        }
    }
}

/// Per-field inequality of the raw values, independent of comparison mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFlags {
    pub title_diff: bool,
    pub description_diff: bool,
    pub robots_diff: bool,
    pub canonical_diff: bool,
    pub keywords_diff: bool,
}

impl DiffFlags {
    /// Flags computed from plain inequality of every field
    pub fn between(source: &MetadataRecord, target: &MetadataRecord) -> Self {
        Self {
            title_diff: source.title != target.title,
            description_diff: source.description != target.description,
            robots_diff: source.robots != target.robots,
            canonical_diff: source.canonical != target.canonical,
            keywords_diff: source.keywords != target.keywords,
        }
    }
}

/// Outcome of comparing one source page with its target counterpart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Narrated differences in field order; empty when the pages match
    pub diffs: Vec<Finding>,

    /// Raw per-field inequality
    #[serde(flatten)]
    pub flags: DiffFlags,
}

impl DiffResult {
    /// Whether no difference was narrated
    pub fn is_clean(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Findings rendered as display strings
    pub fn messages(&self) -> Vec<String> {
        self.diffs.iter().map(ToString::to_string).collect()
    }
}

/// Status column of a report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageStatus {
    #[serde(rename = "OK")]
    Ok,
    Diff,
    /// The page could not be fetched; carries the attempted URL
    Missing(String),
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStatus::Ok => write!(f, "OK"),
            PageStatus::Diff => write!(f, "Diff"),
            PageStatus::Missing(url) => write!(f, "Missing: {url}"),
        }
    }
}

/// Summary of one page kept by callers for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    /// Path of the page relative to both sites
    pub url: String,

    pub status: PageStatus,

    /// Findings joined by newlines, "No differences", or the failure description
    pub details: String,

    #[serde(flatten)]
    pub flags: DiffFlags,

    pub source_canonical: String,
    pub target_canonical: String,
}

impl PageReport {
    /// Build a report row from a completed comparison
    pub fn compared(
        path: &str,
        source: &MetadataRecord,
        target: &MetadataRecord,
        result: &DiffResult,
    ) -> Self {
        let (status, details) = if result.is_clean() {
            (PageStatus::Ok, "No differences".to_string())
        } else {
            (PageStatus::Diff, result.messages().join("\n"))
        };

        Self {
            url: path.to_string(),
            status,
            details,
            flags: result.flags,
            source_canonical: source.canonical.clone(),
            target_canonical: target.canonical.clone(),
        }
    }

    /// Build a report row for a page whose fetch failed
    pub fn missing(path: &str, attempted_url: &str, details: impl Into<String>) -> Self {
        Self {
            url: path.to_string(),
            status: PageStatus::Missing(attempted_url.to_string()),
            details: details.into(),
            flags: DiffFlags::default(),
            source_canonical: String::new(),
            target_canonical: String::new(),
        }
    }
}
