// Re-export modules
pub mod compare;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{CompareSettings, ComparisonConfig};
pub use fetcher::{ExtractionFailure, Fetcher, Side};
pub use results::{DiffResult, MetadataRecord, PageReport};

use filter::PathFilter;

/// Compares SEO metadata of pages between an original and a target site.
///
/// Holds only the HTTP fetcher; settings are passed into every call and
/// nothing is remembered between calls.
pub struct MetaCompare {
    fetcher: Fetcher,
}

/// Both records of a successful comparison, along with the diff
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source: MetadataRecord,
    pub target: MetadataRecord,
    pub result: DiffResult,
}

impl MetaCompare {
    /// Create an engine around a fetcher
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Create an engine whose fetcher follows the settings' timeout and user agent
    pub fn from_settings(settings: &CompareSettings) -> Result<Self, fetcher::FetcherError> {
        Ok(Self::new(Fetcher::from_settings(settings)?))
    }

    /// Fetch both URLs and compare their metadata.
    ///
    /// The target is fetched first; when it fails the source is never
    /// requested.
    pub async fn compare_urls(
        &self,
        source_url: &str,
        target_url: &str,
        config: &ComparisonConfig,
    ) -> Result<Comparison, ExtractionFailure> {
        let target = self
            .fetcher
            .extract(target_url)
            .await
            .map_err(|e| ExtractionFailure::new(Side::Target, e))?;
        let source = self
            .fetcher
            .extract(source_url)
            .await
            .map_err(|e| ExtractionFailure::new(Side::Source, e))?;

        let result = compare::compare(&source, &target, config);
        Ok(Comparison {
            source,
            target,
            result,
        })
    }

    /// Compare one page, identified by its path on both sites
    pub async fn compare_page(&self, settings: &CompareSettings, path: &str) -> PageReport {
        let source_url = utils::join_url(&settings.original, path);
        let target_url = utils::join_url(&settings.target, path);

        match self
            .compare_urls(&source_url, &target_url, &settings.comparison)
            .await
        {
            Ok(comparison) => PageReport::compared(
                path,
                &comparison.source,
                &comparison.target,
                &comparison.result,
            ),
            Err(failure) => PageReport::missing(path, &failure.url, failure.status()),
        }
    }

    /// Compare every page in order, one at a time.
    ///
    /// Paths rejected by the filter are skipped; a failed page is recorded and
    /// the run continues.
    pub async fn compare_pages<I, S>(
        &self,
        settings: &CompareSettings,
        filter: &PathFilter,
        paths: I,
    ) -> Vec<PageReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !filter.should_compare(path) {
                ::log::debug!("Skipping filtered path {}", path);
                continue;
            }
            let report = self.compare_page(settings, path).await;
            ::log::info!("Compared {}: {}", report.url, report.status);
            reports.push(report);
        }
        reports
    }
}
