use ini_rs::Document;
use log::{debug, warn, LevelFilter};
use std::env;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use walkdir::WalkDir;

const INI_CHECK_VERSION: &str = env!("CARGO_PKG_VERSION");
const INI_EXTENSION: &str = "ini";

#[derive(Debug, Default, PartialEq)]
struct Config {
    list: bool,
    paths: Vec<PathBuf>,
    verbose: bool,
    version: bool,
}

fn help() {
    println!(
        "Usage:
ini-check --version
ini-check [-v|--verbose] [--list] PATH..."
    );
}

fn parse_args(args: Vec<String>) -> Result<Config, String> {
    let mut cfg = Config::default();

    for arg in args.into_iter().skip(1) {
        match &arg[..] {
            "--list" => cfg.list = true,
            "-v" | "--verbose" => cfg.verbose = true,
            "--version" => cfg.version = true,
            _ if arg.starts_with('-') => return Err(format!("Unknown argument: {arg}")),
            _ => cfg.paths.push(arg.into()),
        }
    }

    if !cfg.version && cfg.paths.is_empty() {
        return Err("Missing PATH argument".into());
    }

    Ok(cfg)
}

/// Expands directories into the `*.ini` files below them, sorted by path
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(path) {
            match entry {
                Err(e) => warn!("Error occurred walking {path:?}: {e}"),
                Ok(entry) => {
                    if entry.file_type().is_file()
                        && entry.path().extension().unwrap_or_default() == INI_EXTENSION
                    {
                        found.push(entry.into_path());
                    }
                }
            }
        }
        found.sort_unstable();
        files.append(&mut found);
    }

    files
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn list_entries<W: Write>(doc: &Document, writer: &mut W) -> io::Result<()> {
    for (key, value) in doc.global().iter() {
        writeln!(writer, "{key}={value}")?;
    }
    for (section, entries) in doc.sections() {
        for (key, value) in entries.iter() {
            writeln!(writer, "{section}.{key}={value}")?;
        }
    }

    Ok(())
}

fn check_file(path: &Path, list: bool) -> bool {
    let doc = match ini_rs::read_file(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Error reading {path:?}: {e}");
            return false;
        }
    };

    debug!(
        "{path:?} is valid: {} global key(s), {} section(s)",
        doc.global().len(),
        doc.len()
    );

    if list {
        let mut writer = BufWriter::new(io::stdout().lock());
        if let Err(e) = list_entries(&doc, &mut writer).and_then(|_| writer.flush()) {
            warn!("Error writing entries of {path:?}: {e}");
            return false;
        }
    }

    true
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            println!("Error: {}", msg);
            help();
            process::exit(1)
        }
    };

    let _ = simplelog::SimpleLogger::init(log_level(cfg.verbose), simplelog::Config::default());

    if cfg.version {
        println!("ini-check {}", INI_CHECK_VERSION);
        process::exit(0);
    }

    let files = collect_files(&cfg.paths);
    debug!("Checking {} file(s)", files.len());

    let mut failed = 0;
    for path in &files {
        if !check_file(path, cfg.list) {
            failed += 1;
        }
    }

    if failed > 0 {
        warn!("{failed} of {} file(s) failed", files.len());
        process::exit(1);
    }
}
