use crate::config::ComparisonConfig;
use crate::results::{DiffFlags, DiffResult, Field, Finding, MetadataRecord};
use url::Url;

/// Strips leading `http://` / `https://` schemes and then every trailing `/`.
///
/// Repeated schemes are all removed so that normalizing twice is a no-op.
pub fn normalize(value: &str) -> &str {
    let mut rest = value;
    while let Some(stripped) = rest
        .strip_prefix("http://")
        .or(rest.strip_prefix("https://"))
    {
        rest = stripped;
    }
    rest.trim_end_matches('/')
}

/// Base that relative canonical hrefs are resolved against
const PLACEHOLDER_BASE: &str = "http://placeholder.invalid/";

/// Path component of a canonical URL.
///
/// Relative and protocol-relative hrefs (`/p?q`, `p`, `//host/p`) are
/// resolved against a placeholder base so that only their path remains.
pub fn canonical_path(canonical: &str) -> String {
    if canonical.is_empty() {
        return String::new();
    }

    Url::parse(canonical)
        .or_else(|_| Url::parse(PLACEHOLDER_BASE).and_then(|base| base.join(canonical)))
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| {
            canonical
                .split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
}

/// Compares two metadata records.
///
/// The narrated findings depend on `config`; the diff flags are always the
/// raw inequality of all five fields.
pub fn compare(
    source: &MetadataRecord,
    target: &MetadataRecord,
    config: &ComparisonConfig,
) -> DiffResult {
    let diffs = if config.canonical_only {
        compare_canonical_only(source, target, config.normalize)
    } else {
        compare_all_fields(source, target, config.normalize)
    };

    DiffResult {
        diffs,
        flags: DiffFlags::between(source, target),
    }
}

fn compare_canonical_only(
    source: &MetadataRecord,
    target: &MetadataRecord,
    normalize_urls: bool,
) -> Vec<Finding> {
    if source.canonical.is_empty() || target.canonical.is_empty() {
        return vec![Finding::CanonicalMissing];
    }

    let a = field_value(&source.canonical, normalize_urls);
    let b = field_value(&target.canonical, normalize_urls);
    if a != b {
        return vec![Finding::CanonicalMismatch {
            source: source.canonical.clone(),
            target: target.canonical.clone(),
        }];
    }

    Vec::new()
}

fn compare_all_fields(
    source: &MetadataRecord,
    target: &MetadataRecord,
    normalize_urls: bool,
) -> Vec<Finding> {
    let mut diffs = Vec::new();

    for field in Field::ALL {
        let (a, b) = (source.get(field), target.get(field));

        let equal = if field == Field::Canonical {
            // Sites on different hosts share paths, not full URLs
            path_value(a, normalize_urls) == path_value(b, normalize_urls)
        } else {
            field_value(a, normalize_urls) == field_value(b, normalize_urls)
        };

        if !equal {
            diffs.push(Finding::FieldMismatch {
                field,
                source: a.to_string(),
                target: b.to_string(),
            });
        }
    }

    diffs
}

fn field_value(value: &str, normalize_urls: bool) -> &str {
    if normalize_urls { normalize(value) } else { value }
}

/// Canonical path, with trailing slashes ignored only when normalizing
fn path_value(canonical: &str, normalize_urls: bool) -> String {
    let path = canonical_path(canonical);
    if normalize_urls {
        path.trim_end_matches('/').to_string()
    } else {
        path
    }
}
