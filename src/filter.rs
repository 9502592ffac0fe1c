use crate::config::{CompareSettings, ConfigError};
use regex::Regex;

/// Decides which page paths take part in a comparison run
#[derive(Debug, Default)]
pub struct PathFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl PathFilter {
    /// Compile include and exclude patterns
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self, regex::Error> {
        let mut include_regexes = Vec::with_capacity(include_patterns.len());
        for pattern in include_patterns {
            include_regexes.push(Regex::new(pattern)?);
        }

        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Build the filter configured in the settings
    pub fn from_settings(settings: &CompareSettings) -> Result<Self, ConfigError> {
        Ok(Self::new(&settings.include_patterns, &settings.exclude_patterns)?)
    }

    /// Whether a page path should be compared
    pub fn should_compare(&self, path: &str) -> bool {
        // Exclusions take precedence
        if self.exclude_regexes.iter().any(|r| r.is_match(path)) {
            return false;
        }

        // If include patterns are specified, at least one must match
        self.include_regexes.is_empty() || self.include_regexes.iter().any(|r| r.is_match(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_admits_everything() {
        let filter = PathFilter::default();
        assert!(filter.should_compare("/"));
        assert!(filter.should_compare("/about/"));
    }

    #[test]
    fn test_regex_patterns() {
        let filter = PathFilter::new(
            &[r"^/docs/".to_string()],
            &[r"^/docs/draft/".to_string()],
        )
        .unwrap();

        // Matching include pattern should be allowed
        assert!(filter.should_compare("/docs/page/"));

        // Non-matching include pattern should be excluded
        assert!(!filter.should_compare("/blog/post/"));

        // Matching exclude pattern should be excluded even if it matches include
        assert!(!filter.should_compare("/docs/draft/page/"));
    }

    #[test]
    fn test_invalid_pattern() {
        let mut settings = CompareSettings::new("https://a.com", "https://b.com");
        settings.exclude_patterns = vec!["(".to_string()];
        let err = PathFilter::from_settings(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern(_)));
    }
}
