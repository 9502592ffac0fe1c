use scraper::{Html, Selector};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;

static LD_JSON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("static ld+json selector")
});

/// Collects keywords from every LD+JSON block in the document.
///
/// Keywords from all blocks are gathered in document order, duplicates are
/// collapsed on their exact (raw-case) text keeping the first occurrence,
/// empty entries dropped, and the result joined with ", " and lower-cased.
/// Blocks that are empty or fail to parse are skipped.
pub fn extract_keywords(doc: &Html) -> String {
    let mut keywords = Vec::new();

    for script in doc.select(&LD_JSON_SELECTOR) {
        let text = script.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(text) {
            Ok(value) => collect_keywords(&value, &mut keywords),
            Err(e) => ::log::debug!("Skipping malformed ld+json block: {}", e),
        }
    }

    join_keywords(keywords)
}

/// Appends the keywords of one parsed LD+JSON value
pub fn collect_keywords(value: &Value, out: &mut Vec<String>) {
    for item in items(value) {
        match item.get("keywords") {
            Some(Value::Array(list)) => out.extend(list.iter().filter_map(scalar_to_string)),
            Some(scalar) => {
                if let Some(s) = scalar_to_string(scalar) {
                    out.extend(s.split(',').map(|piece| piece.trim().to_string()));
                }
            }
            None => {}
        }
    }
}

/// The items of a block: its `@graph` array, the value itself if it is an
/// array, or else the single value.
fn items(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(graph)) => graph.iter().collect(),
            _ => vec![value],
        },
        Value::Array(list) => list.iter().collect(),
        _ => vec![value],
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Dedupes (first occurrence wins), drops empty entries, joins and lower-cases
pub fn join_keywords(keywords: Vec<String>) -> String {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        // "0" counts as empty, like the other falsy entries
        .filter(|k| !k.is_empty() && k != "0")
        .filter(|k| seen.insert(k.clone()))
        .collect::<Vec<_>>()
        .join(", ")
        .to_lowercase()
}
