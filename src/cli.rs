use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::engine::Engine;
use crate::services::fetch::ReqwestFetcher;
use crate::services::log::CrawlLog;
use crate::services::store::FsRecipeStore;
use crate::types::SiteConfig;

/// Listing crawled when no URL is given.
pub const DEFAULT_LIST_URL: &str = "https://fitfoodiefinds.com/recipes/";

#[derive(Parser)]
#[command(name = "larder", version, about = "Archive a recipe site as structured JSON")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crawl every listing page and archive every recipe found
    Crawl(CrawlArgs),
    /// Fetch and archive a single recipe page
    Fetch(FetchArgs),
    /// Print the activity trail of previous runs
    Log(LogArgs),
}

#[derive(Args)]
struct CrawlArgs {
    /// Paginated recipe listing to crawl
    #[arg(default_value = DEFAULT_LIST_URL)]
    url: String,
    #[command(flatten)]
    out: OutArg,
}

#[derive(Args)]
struct FetchArgs {
    /// Recipe page to fetch
    url: String,
    #[command(flatten)]
    out: OutArg,
}

#[derive(Args)]
struct LogArgs {
    /// Only show failures
    #[arg(long)]
    errors: bool,
    #[command(flatten)]
    out: OutArg,
}

#[derive(Args)]
struct OutArg {
    /// Output root directory (defaults to the platform data dir)
    #[arg(long)]
    out: Option<PathBuf>,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Crawl(args) => crawl(args).await,
        Command::Fetch(args) => fetch(args).await,
        Command::Log(args) => show_log(args),
    }
}

/// Resolve the output root and make sure it exists; the per-site
/// directory under it is left to the store.
fn resolve_root(out: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let root = match out {
        Some(path) => path,
        None => FsRecipeStore::default_root()?,
    };
    fs::create_dir_all(&root)
        .with_context(|| format!("creating output root {}", root.display()))?;
    Ok(root)
}

fn site_for(url: &str) -> anyhow::Result<SiteConfig> {
    let parsed = Url::parse(url).with_context(|| format!("parsing {url}"))?;
    Ok(SiteConfig::new(parsed)?)
}

async fn crawl(args: CrawlArgs) -> anyhow::Result<()> {
    let site = site_for(&args.url)?;
    let root = resolve_root(args.out.out)?;
    let store = FsRecipeStore::new(&root, site.site_name());
    let fetcher = ReqwestFetcher::new()?;
    let log = CrawlLog::new(&root);
    let engine = Engine::new(&store, &fetcher, site);

    let report = match engine.crawl().await {
        Ok(report) => report,
        Err(e) => {
            let _ = log.error(None, "crawl", Some(&e.to_string()));
            return Err(e.into());
        }
    };

    for failure in &report.failures {
        let _ = log.error(Some(&failure.url), "harvest", Some(&failure.reason));
    }
    let _ = log.info(
        None,
        "crawl",
        Some(&format!(
            "saved {} of {} recipes",
            report.saved.len(),
            report.discovered
        )),
    );

    print_json(&report);
    Ok(())
}

async fn fetch(args: FetchArgs) -> anyhow::Result<()> {
    let site = site_for(&args.url)?;
    let root = resolve_root(args.out.out)?;
    let store = FsRecipeStore::new(&root, site.site_name());
    let fetcher = ReqwestFetcher::new()?;
    let log = CrawlLog::new(&root);
    let engine = Engine::new(&store, &fetcher, site);

    match engine.harvest_one(&args.url).await {
        Ok(filename) => {
            let _ = log.info(Some(&args.url), "fetch", Some(&filename));
            println!("{}", store.dir().join(filename).display());
            Ok(())
        }
        Err(e) => {
            let _ = log.error(Some(&args.url), "fetch", Some(&e.to_string()));
            Err(e.into())
        }
    }
}

fn show_log(args: LogArgs) -> anyhow::Result<()> {
    let root = match args.out.out {
        Some(path) => path,
        None => FsRecipeStore::default_root()?,
    };
    for line in CrawlLog::new(&root).read_entries(args.errors)? {
        println!("{line}");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(val: &T) {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val).unwrap());
}
