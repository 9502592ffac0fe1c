use clap::Parser;
use seo_meta_compare::MetaCompare;
use seo_meta_compare::filter::PathFilter;
use seo_meta_compare::results::{PageReport, PageStatus};
use seo_meta_compare::utils;
use std::fs;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings()?;
    let filter = PathFilter::from_settings(&settings)?;
    let engine = MetaCompare::from_settings(&settings)?;

    let mut paths: Vec<String> = args.paths.iter().map(|p| utils::page_path(p)).collect();
    if let Some(file) = &args.paths_file {
        paths.extend(utils::parse_page_list(&fs::read_to_string(file)?));
    }
    if paths.is_empty() {
        return Err("no pages to compare; pass paths or --paths-file".into());
    }

    ::log::info!(
        "Comparing {} pages: {} -> {}",
        paths.len(),
        settings.original,
        settings.target
    );
    let start_time = std::time::Instant::now();

    let reports = engine.compare_pages(&settings, &filter, &paths).await;
    for (index, report) in reports.iter().enumerate() {
        print_report(index + 1, report);
    }

    let count = |f: fn(&PageStatus) -> bool| reports.iter().filter(|r| f(&r.status)).count();
    let ok = count(|s| matches!(s, PageStatus::Ok));
    let diff = count(|s| matches!(s, PageStatus::Diff));
    let missing = count(|s| matches!(s, PageStatus::Missing(_)));
    println!("{} pages: {ok} OK, {diff} Diff, {missing} Missing", reports.len());

    ::log::info!(
        "Comparison complete - {} pages in {:.2} seconds",
        reports.len(),
        start_time.elapsed().as_secs_f64()
    );

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&reports)?)?;
        ::log::info!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_report(index: usize, report: &PageReport) {
    if let PageStatus::Missing(url) = &report.status {
        ::log::warn!("{}: {} ({})", report.details, url, report.url);
    }

    println!("{index}\t{}\t{}", report.url, report.status);
    for line in report.details.lines() {
        println!("\t{line}");
    }
}
