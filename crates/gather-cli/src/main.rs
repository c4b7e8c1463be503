//! `gather` — crawl Steam reviews for one app into chunked JSON artifacts.
//!
//! # Usage
//!
//! ```
//! gather 1382330
//! gather 1382330 --pages 10 --out ./reviews
//! gather 1382330 --oldest 2023-03-10 --newest 2023-03-20
//! ```

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use gather_core::filter::DateRange;
use gather_steam::{
  error::FetchError,
  fetch::PageLimit,
  pipeline::{self, RunSpec},
  transport::HttpSteamApi,
};
use serde::Deserialize;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gather", about = "Steam review crawler")]
struct Args {
  /// Steam app id to crawl (e.g. 1382330).
  app_id: u32,

  /// How many listing pages to fetch: 'all' or a positive count
  /// (1 page = 100 reviews, most recent first).
  #[arg(long, default_value = "all", value_parser = parse_pages)]
  pages: PageLimit,

  /// Keep only reviews on or after this date (YYYY-MM-DD).
  /// Requires --newest.
  #[arg(long, value_name = "DATE")]
  oldest: Option<NaiveDate>,

  /// Keep only reviews on or before this date (YYYY-MM-DD).
  /// Requires --oldest.
  #[arg(long, value_name = "DATE")]
  newest: Option<NaiveDate>,

  /// Output directory for the chunked JSON artifacts.
  #[arg(long, value_name = "DIR")]
  out: Option<PathBuf>,

  /// Path to a TOML config file (out_dir, base_url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,
}

fn parse_pages(s: &str) -> Result<PageLimit, String> {
  if s.eq_ignore_ascii_case("all") {
    return Ok(PageLimit::All);
  }
  s.parse::<u32>()
    .ok()
    .filter(|n| *n > 0)
    .map(PageLimit::Max)
    .ok_or_else(|| "expected 'all' or a positive page count".to_string())
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file. Flags override these values.
#[derive(Deserialize, Default)]
struct ConfigFile {
  out_dir:  Option<PathBuf>,
  base_url: Option<String>,
}

// ─── Date bounds ──────────────────────────────────────────────────────────────

/// Both bounds or neither; each must not be after `today`; oldest must not
/// be after newest. Runs before any network traffic.
fn resolve_date_range(
  oldest: Option<NaiveDate>,
  newest: Option<NaiveDate>,
  today: NaiveDate,
) -> Result<Option<DateRange>> {
  let (oldest, newest) = match (oldest, newest) {
    (None, None) => return Ok(None),
    (Some(o), Some(n)) => (o, n),
    _ => bail!("--oldest and --newest must be given together"),
  };

  for bound in [oldest, newest] {
    if bound > today {
      bail!("date bound {bound} is in the future");
    }
  }

  Ok(Some(DateRange::new(oldest, newest)?))
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  let date_range =
    resolve_date_range(args.oldest, args.newest, Utc::now().date_naive())?;
  let out_dir = args
    .out
    .or(file_cfg.out_dir)
    .unwrap_or_else(|| PathBuf::from("reviews"));

  let api = match &file_cfg.base_url {
    Some(base) => HttpSteamApi::with_base_url(base),
    None => HttpSteamApi::new(),
  }
  .context("building HTTP transport")?;

  let spec = RunSpec {
    app_id: args.app_id,
    page_limit: args.pages,
    date_range,
  };

  info!(app_id = spec.app_id, "fetching reviews (this may take a bit)");
  let run_started = Utc::now();
  let report = match pipeline::run(&api, &spec).await {
    Ok(report) => report,
    Err(FetchError::NoReviews) => {
      warn!(app_id = spec.app_id, "the app has no reviews; nothing to save");
      return Err(anyhow!("app {} has no reviews", spec.app_id));
    }
    Err(err) => {
      return Err(anyhow::Error::new(err).context("reviews not found"));
    }
  };

  let paths =
    output::write_chunks(&out_dir, spec.app_id, run_started, &report.chunks)?;

  info!(
    fetched = report.fetched,
    kept = report.kept,
    "saved reviews for the {} '{}' (app id {}) across {} file(s) under {}",
    report.app.kind,
    report.app.name,
    spec.app_id,
    paths.len(),
    out_dir.display(),
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn pages_parses_all_and_positive_counts() {
    assert_eq!(parse_pages("all").unwrap(), PageLimit::All);
    assert_eq!(parse_pages("ALL").unwrap(), PageLimit::All);
    assert_eq!(parse_pages("7").unwrap(), PageLimit::Max(7));
    assert!(parse_pages("0").is_err());
    assert!(parse_pages("-3").is_err());
    assert!(parse_pages("lots").is_err());
  }

  #[test]
  fn no_bounds_means_no_filter() {
    let range =
      resolve_date_range(None, None, date(2023, 3, 20)).unwrap();
    assert!(range.is_none());
  }

  #[test]
  fn bounds_must_come_in_pairs() {
    let today = date(2023, 3, 20);
    assert!(resolve_date_range(Some(today), None, today).is_err());
    assert!(resolve_date_range(None, Some(today), today).is_err());
  }

  #[test]
  fn future_bounds_are_rejected() {
    let today = date(2023, 3, 20);
    let result =
      resolve_date_range(Some(date(2023, 3, 1)), Some(date(2023, 3, 21)), today);
    assert!(result.is_err());
  }

  #[test]
  fn reversed_bounds_are_rejected() {
    let today = date(2023, 3, 20);
    let result =
      resolve_date_range(Some(date(2023, 3, 15)), Some(date(2023, 3, 10)), today);
    assert!(result.is_err());
  }

  #[test]
  fn valid_bounds_build_an_inclusive_range() {
    let today = date(2023, 3, 20);
    let range =
      resolve_date_range(Some(date(2023, 3, 10)), Some(date(2023, 3, 20)), today)
        .unwrap()
        .unwrap();
    assert!(range.contains(date(2023, 3, 15)));
    assert!(!range.contains(date(2023, 3, 21)));
  }
}
