use crate::parsers::parse_metadata;
use crate::results::MetadataRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_page() {
        let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Contact Us | Example</title>
  <meta name="description" content="Get in touch">
  <meta name="robots" content="noindex, nofollow">
  <link rel="canonical" href="https://example.com/contact/">
  <script type="application/ld+json">
  {"@context": "https://schema.org", "@graph": [
    {"@type": "WebPage", "keywords": "Contact, Support"},
    {"@type": "Organization", "name": "Example"}
  ]}
  </script>
  <script type="application/ld+json">{"@type": "FAQPage", "keywords": ["Support", "Help"]}</script>
</head>
<body><h1>Contact</h1></body>
</html>"#;

        assert_eq!(
            parse_metadata(html),
            MetadataRecord {
                title: "Contact Us | Example".to_string(),
                description: "Get in touch".to_string(),
                robots: "noindex, nofollow".to_string(),
                canonical: "https://example.com/contact/".to_string(),
                keywords: "contact, support, help".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let html = r#"<title>T</title>
            <script type="application/ld+json">{"keywords": "b, a, b"}</script>"#;
        assert_eq!(parse_metadata(html), parse_metadata(html));
        assert_eq!(parse_metadata(html).keywords, "b, a");
    }
}
