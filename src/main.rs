use cs_log_stats::{parse, Report, SortKey};
use main_error::MainError;
use rayon::prelude::*;
use std::env::args;
use std::ffi::OsStr;
use std::fs;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

fn main() -> Result<(), MainError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let path = match positional.next() {
        Some(path) => PathBuf::from(path),
        None => {
            let keys: Vec<_> = enum_iterator::all::<SortKey>()
                .map(|key| key.as_str())
                .collect();
            eprintln!("usage: cs-log-stats <file or directory> [sort key] [--json]");
            eprintln!("sort keys: {}", keys.join(", "));
            std::process::exit(1);
        }
    };
    let sort = positional.next().map(|key| key.parse()).transpose()?;

    let mut stdout = stdout().lock();

    if path.is_dir() {
        let files = json_files(&path)?;
        let reports: Vec<_> = files
            .par_iter()
            .map(|file| load(file, sort))
            .collect();
        for (file, report) in files.iter().zip(reports) {
            match report {
                Ok(report) => write_report(&mut stdout, &report, json)?,
                Err(e) => tracing::error!(file = %file.display(), "{}", e),
            }
        }
    } else {
        let report = load(&path, sort)?;
        write_report(&mut stdout, &report, json)?;
    }

    Ok(())
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension() == Some(OsStr::new("json")) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("Failed to read match record: {0}")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Stats(#[from] cs_log_stats::Error),
}

fn load(path: &Path, sort: Option<SortKey>) -> Result<Report, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content, sort)?)
}

fn write_report(out: &mut impl Write, report: &Report, json: bool) -> Result<(), MainError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(())
}
