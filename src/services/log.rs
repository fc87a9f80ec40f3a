use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Error,
}

/// Append-only trail of crawl activity, kept next to the archived
/// recipes. Survives the process, so skipped links stay discoverable
/// after a long crawl finishes.
pub struct CrawlLog {
    log_path: PathBuf,
}

impl CrawlLog {
    pub fn new(output_root: &Path) -> Self {
        Self {
            log_path: output_root.join("crawl.log"),
        }
    }

    pub fn log(
        &self,
        level: LogLevel,
        url: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let level_str = match level {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        };

        writeln!(
            file,
            "{} {} {} {} {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            level_str,
            event,
            url.unwrap_or("*"),
            details.unwrap_or("")
        )?;

        Ok(())
    }

    /// Entries of previous runs, most recent first.
    pub fn read_entries(&self, errors_only: bool) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let file = fs::File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut matching_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains("🔴") {
                continue;
            }
            matching_lines.push(line);
        }

        matching_lines.reverse();
        Ok(matching_lines)
    }

    pub fn info(&self, url: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, url, event, details)
    }

    pub fn error(&self, url: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, url, event, details)
    }
}
