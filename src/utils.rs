use url::Url;

/// Reduce a page identifier to its path.
///
/// Full URLs contribute only their path; anything else is treated as a path
/// and gets a leading `/` if it lacks one.
pub fn page_path(page: &str) -> String {
    let page = page.trim();
    if let Ok(url) = Url::parse(page) {
        if url.has_host() {
            return url.path().to_string();
        }
    }

    if page.starts_with('/') {
        page.to_string()
    } else {
        format!("/{page}")
    }
}

/// Join a site base URL and a page path, dropping the base's trailing slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Parse a page list: one identifier per line, blank lines and `#` comments skipped
pub fn parse_page_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(page_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path() {
        assert_eq!(page_path("https://a.com/about/?x=1"), "/about/");
        assert_eq!(page_path("https://a.com"), "/");
        assert_eq!(page_path("/contact/"), "/contact/");
        assert_eq!(page_path("contact/"), "/contact/");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://b.com/", "/about/"), "https://b.com/about/");
        assert_eq!(join_url("https://b.com", "/"), "https://b.com/");
    }

    #[test]
    fn test_parse_page_list() {
        let list = "# pages\n/\n\n  https://a.com/blog/post/ \nabout\n";
        assert_eq!(parse_page_list(list), vec!["/", "/blog/post/", "/about"]);
    }
}
