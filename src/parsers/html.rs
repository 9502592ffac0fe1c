use crate::parsers::json_ld;
use crate::results::MetadataRecord;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static title selector"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name]").expect("static meta selector"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel]").expect("static link selector"));

/// Parses an HTML document into its SEO metadata record.
///
/// The parser is html5ever's error-recovering tree builder, so unclosed tags,
/// bad nesting and a missing doctype never fail; recovered errors are only
/// counted in the debug log.
pub fn parse(html: &str) -> MetadataRecord {
    let doc = Html::parse_document(html);
    if !doc.errors.is_empty() {
        ::log::debug!("HTML parser recovered from {} markup errors", doc.errors.len());
    }

    MetadataRecord {
        title: extract_title(&doc),
        description: extract_meta_content(&doc, "description"),
        robots: extract_meta_content(&doc, "robots"),
        canonical: extract_canonical(&doc),
        keywords: json_ld::extract_keywords(&doc),
    }
}

/// Trimmed text of the first `<title>` element
pub fn extract_title(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// `content` of the last `<meta>` whose `name` equals `name` exactly.
///
/// A matching element without `content` still wins and yields "".
pub fn extract_meta_content(doc: &Html, name: &str) -> String {
    doc.select(&META_SELECTOR)
        .filter(|e| e.value().attr("name") == Some(name))
        .last()
        .map(|e| e.value().attr("content").unwrap_or_default().to_string())
        .unwrap_or_default()
}

/// `href` of the last `<link rel="canonical">`
pub fn extract_canonical(doc: &Html) -> String {
    doc.select(&CANONICAL_SELECTOR)
        .filter(|e| e.value().attr("rel") == Some("canonical"))
        .last()
        .map(|e| e.value().attr("href").unwrap_or_default().to_string())
        .unwrap_or_default()
}
