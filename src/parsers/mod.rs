pub mod html;
pub mod json_ld;

#[cfg(test)]
mod tests;

use crate::results::MetadataRecord;

/// Parses a fetched HTML body into a metadata record
pub fn parse_metadata(body: &str) -> MetadataRecord {
    let record = html::parse(body);
    ::log::debug!(
        "Parsed metadata: title={:?} canonical={:?} keywords={:?}",
        record.title,
        record.canonical,
        record.keywords
    );
    record
}
