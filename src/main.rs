mod batch;
mod error;
mod scanner;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use fullname_parser::parse_fullname;

use error::{Error, Result};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "fullname",
    about = "Split free-form personal names into title, first, middle, last, nickname and suffix"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse names given as arguments, or one per line on stdin
    Parse {
        /// Names to parse; reads stdin when empty
        names: Vec<String>,
        /// Pretty-print each JSON record
        #[arg(long)]
        pretty: bool,
    },
    /// Parse every name-list file under a directory → JSON report
    Batch {
        /// Directory to scan recursively
        root: PathBuf,
        /// Output file
        #[arg(long, default_value_os_t = Path::new(OUTPUT_DIR).join("names.json"))]
        out: PathBuf,
        /// Extension of name-list files
        #[arg(long, default_value = "txt")]
        ext: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Parse { names, pretty } => run_parse(&names, pretty),
        Command::Batch { root, out, ext } => run_batch(&root, &out, &ext),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: one JSON record per name on stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(names: &[String], pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    parse_into(&mut out, io::stdin().lock(), names, pretty)?;
    out.flush().map_err(Error::Stdout)
}

/// Parse `names`, or every non-blank line of `input` when `names` is empty.
fn parse_into(
    out: &mut impl Write,
    input: impl BufRead,
    names: &[String],
    pretty: bool,
) -> Result<()> {
    if !names.is_empty() {
        for name in names {
            emit(out, name, pretty)?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.map_err(Error::Stdin)?;
        if line.trim().is_empty() {
            continue;
        }
        emit(out, &line, pretty)?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, input: &str, pretty: bool) -> Result<()> {
    let parsed = parse_fullname(input);
    let json = if pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    writeln!(out, "{json}").map_err(Error::Stdout)
}

// ═══════════════════════════════════════════════════════════════════════
//  BATCH MODE: scan a tree of name lists → output/names.json
// ═══════════════════════════════════════════════════════════════════════

fn run_batch(root: &Path, out: &Path, ext: &str) -> Result<()> {
    let report = batch::run_batch(root, ext)?;

    write_json(out, &report)?;

    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  FIELD COVERAGE ({} names, {} files)", report.stats.names, report.stats.files);
    eprintln!("══════════════════════════════════════════");
    for (field, count) in &report.stats.fields {
        eprintln!("  {field:<7} {count}");
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, &json).map_err(|e| Error::io(path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_to_string(input: &str, names: &[&str], pretty: bool) -> String {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let mut out = Vec::new();
        parse_into(&mut out, input.as_bytes(), &names, pretty).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_arguments_one_record_per_line() {
        let out = parse_to_string("ignored\n", &["Juan Xavier", "Cotter"], false);
        assert_eq!(
            out,
            "{\"first\":\"Juan\",\"last\":\"Xavier\"}\n{\"last\":\"Cotter\"}\n"
        );
    }

    #[test]
    fn test_parse_reads_lines_when_no_arguments() {
        let out = parse_to_string("Dr. Juan Xavier\n\n   \nCotter\n", &[], false);
        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            records,
            vec![
                serde_json::json!({ "title": "Dr.", "first": "Juan", "last": "Xavier" }),
                serde_json::json!({ "last": "Cotter" }),
            ]
        );
    }

    #[test]
    fn test_parse_pretty_output() {
        let out = parse_to_string("", &["Cotter"], true);
        assert_eq!(out, "{\n  \"last\": \"Cotter\"\n}\n");
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        assert!(parse_to_string("", &[], false).is_empty());
    }
}
