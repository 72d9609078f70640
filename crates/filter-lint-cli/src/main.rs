use anyhow::{Context, Result, bail};
use filter_lint_config::Config;
use filter_lint_engine::{Diagnostic, FilterDocument, Severity, ValidationData};
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

const USAGE: &str = "Usage: filter-lint [--config <path>] [--warnings-as-errors] <file>...";

#[derive(Debug, Default, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    warnings_as_errors: bool,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path"),
            },
            "--warnings-as-errors" => options.warnings_as_errors = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            file => options.files.push(PathBuf::from(file)),
        }
    }
    if options.files.is_empty() {
        bail!("no filter files given");
    }
    Ok(options)
}

fn load_validation_data(options: &Options) -> Result<ValidationData> {
    let config = match &options.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config.validation_data()?)
}

/// `path:row:col: severity: excerpt`, with 1-based row and column.
fn format_diagnostic(path: &Path, severity: Severity, diagnostic: &Diagnostic) -> String {
    let path = diagnostic.file.as_deref().unwrap_or(path);
    format!(
        "{}:{}:{}: {}: {}",
        path.display(),
        diagnostic.range.start.row + 1,
        diagnostic.range.start.column + 1,
        severity.as_str(),
        diagnostic.excerpt
    )
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Totals {
    files: usize,
    errors: usize,
    warnings: usize,
}

fn lint_file(
    path: &Path,
    data: &Arc<ValidationData>,
    totals: &mut Totals,
    out: &mut impl Write,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = FilterDocument::new(&text, Some(path.to_path_buf()), Arc::clone(data))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::debug!("{}: {} rows", path.display(), doc.lines().len());

    for (severity, diagnostic) in doc.messages() {
        match severity {
            Severity::Error => totals.errors += 1,
            Severity::Warning => totals.warnings += 1,
            Severity::Info => {}
        }
        writeln!(out, "{}", format_diagnostic(path, severity, diagnostic))?;
    }
    totals.files += 1;
    Ok(())
}

/// Lints every file and returns the process exit code.
fn run(options: &Options, out: &mut impl Write) -> Result<i32> {
    let data = Arc::new(load_validation_data(options)?);
    let mut totals = Totals::default();
    for path in &options.files {
        lint_file(path, &data, &mut totals, out)?;
    }

    writeln!(
        out,
        "{} file(s) checked: {} error(s), {} warning(s)",
        totals.files, totals.errors, totals.warnings
    )?;

    let failed = totals.errors > 0 || (options.warnings_as_errors && totals.warnings > 0);
    Ok(if failed { 1 } else { 0 })
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&options, &mut stdout().lock()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}
