use clap::Parser;
use seo_meta_compare::CompareSettings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-meta-compare")]
#[command(about = "Compare SEO meta tags between pages of an original site and a target site")]
#[command(version)]
pub struct Args {
    /// Page paths (or full URLs, of which only the path is used) to compare
    pub paths: Vec<String>,

    /// File listing one page path or URL per line
    #[arg(short, long)]
    pub paths_file: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the original site
    #[arg(long)]
    pub original: Option<String>,

    /// Base URL of the target site
    #[arg(long)]
    pub target: Option<String>,

    /// Compare values verbatim instead of ignoring scheme and trailing slashes
    #[arg(long)]
    pub no_normalize: bool,

    /// Only detect canonical mismatches
    #[arg(long)]
    pub canonical_only: bool,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Regex for page paths to include (repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Regex for page paths to exclude (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

impl Args {
    /// Resolve settings: config file first, then command-line overrides
    pub fn settings(&self) -> Result<CompareSettings, Box<dyn std::error::Error>> {
        let mut settings = match &self.config {
            Some(path) => CompareSettings::from_file(path)?,
            None => CompareSettings::new(
                self.original.as_deref().ok_or("--original is required without --config")?,
                self.target.as_deref().ok_or("--target is required without --config")?,
            ),
        };

        if let Some(original) = &self.original {
            settings.original = original.clone();
        }
        if let Some(target) = &self.target {
            settings.target = target.clone();
        }
        if self.no_normalize {
            settings.comparison.normalize = false;
        }
        if self.canonical_only {
            settings.comparison.canonical_only = true;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        settings.include_patterns.extend(self.include.iter().cloned());
        settings.exclude_patterns.extend(self.exclude.iter().cloned());

        Ok(settings)
    }
}
