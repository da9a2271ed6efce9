use std::env;
use std::io::{self, Write};

use lcs_path::{LcsEngineBuilder, Path, PathSample, StepKind, MAX_SAMPLED_PATHS};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let engine = LcsEngineBuilder::new()
        .with_sample_seed(options.seed)
        .build();
    let a: Vec<char> = options.first.chars().collect();
    let b: Vec<char> = options.second.chars().collect();
    let sample = engine.sample_paths(&a, &b, options.paths);

    let report = Report {
        first: &options.first,
        second: &options.second,
        lcs: sample.paths[0].lcs_string(),
        lcs_len: sample.table.lcs_len(),
        sample: &sample,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = options.format.write(&mut out, &report) {
        eprintln!("lcs_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    first: String,
    second: String,
    paths: usize,
    seed: u64,
    format: OutputFormat,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut words = Vec::with_capacity(2);
        let mut paths = 1usize;
        let mut seed = 0u64;
        let mut format = OutputFormat::Table;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = next_value(&mut args, "--format")?;
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--paths=") {
                paths = parse_paths(value)?;
            } else if arg == "--paths" {
                paths = parse_paths(&next_value(&mut args, "--paths")?)?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_seed(value)?;
            } else if arg == "--seed" {
                seed = parse_seed(&next_value(&mut args, "--seed")?)?;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                words.push(arg);
            }
        }

        if words.len() != 2 {
            return Err(format!("expected two words, got {}", words.len()));
        }
        let second = words.pop().unwrap_or_default();
        let first = words.pop().unwrap_or_default();

        Ok(Self {
            first,
            second,
            paths,
            seed,
            format,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: lcs_probe [options] <FIRST> <SECOND>

Computes the LCS of two words and prints the score table and the
backtracking path(s). Ties are resolved upwards for the first path; extra
paths resolve ties at random.

Options:
  --paths <N>                   Number of paths to print, clamped to 1..={MAX_SAMPLED_PATHS} (default: 1)
  --seed <S>                    Seed for the random tie-breaks of extra paths (default: 0)
  --format <table|csv|json>     Output format (default: table)
  -h, --help                    Print this help message

Examples:
  lcs_probe abcdefgh defabhcda
  lcs_probe --paths 5 --seed 7 --format json abcbdab bdcaba
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

/// Any integer is accepted; out-of-range counts are clamped to
/// `1..=MAX_SAMPLED_PATHS`.
fn parse_paths(value: &str) -> Result<usize, String> {
    let n = value
        .parse::<i64>()
        .map_err(|_| "path count must be an integer".to_string())?;
    // The upper bound is tiny, so the clamped value always fits in usize.
    Ok(n.clamp(1, MAX_SAMPLED_PATHS as i64) as usize)
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| "seed must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
        match self {
            OutputFormat::Table => write_table(out, report),
            OutputFormat::Csv => write_csv(out, report),
            OutputFormat::Json => write_json(out, report),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    first: &'a str,
    second: &'a str,
    lcs: String,
    lcs_len: u32,
    #[serde(flatten)]
    sample: &'a PathSample<char>,
}

fn kind_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Start => "start",
        StepKind::Left => "left",
        StepKind::Up => "up",
        StepKind::Diagonal => "diagonal",
    }
}

fn write_table(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    let table = &report.sample.table;
    let width = table
        .iter_rows()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);

    // Header row: the empty-prefix column, then the second word.
    write!(out, "{:>2} {:>width$}", "", "ε")?;
    for ch in report.second.chars() {
        write!(out, " {ch:>width$}")?;
    }
    writeln!(out)?;

    let labels = std::iter::once('ε').chain(report.first.chars());
    for (label, row) in labels.zip(table.iter_rows()) {
        write!(out, "{label:>2}")?;
        for value in row {
            write!(out, " {value:>width$}")?;
        }
        writeln!(out)?;
    }

    for (idx, path) in report.sample.paths.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "path {} ({} steps, lcs \"{}\")", idx + 1, path.len(), path.lcs_string())?;
        write_steps(out, path)?;
    }

    writeln!(out)?;
    writeln!(out, "LCS: \"{}\" (length {})", report.lcs, report.lcs_len)?;
    Ok(())
}

fn write_steps(out: &mut impl Write, path: &Path<char>) -> io::Result<()> {
    for step in path {
        match step.character {
            Some(ch) => writeln!(
                out,
                "  ({:>3}, {:>3})  {:<8}  {ch}",
                step.row,
                step.col,
                kind_label(step.kind)
            )?,
            None => writeln!(
                out,
                "  ({:>3}, {:>3})  {}",
                step.row,
                step.col,
                kind_label(step.kind)
            )?,
        }
    }
    Ok(())
}

fn write_csv(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    writeln!(out, "path,step,row,col,kind,is_match,character")?;
    for (idx, path) in report.sample.paths.iter().enumerate() {
        for (n, step) in path.iter().enumerate() {
            let character = step
                .character
                .map(|c| c.to_string().replace('"', "\"\""))
                .unwrap_or_default();
            writeln!(
                out,
                "{},{},{},{},{},{},\"{}\"",
                idx + 1,
                n,
                step.row,
                step.col,
                kind_label(step.kind),
                step.is_match,
                character
            )?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
