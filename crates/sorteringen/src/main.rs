#![forbid(unsafe_code)]

//! sorteringen CLI: canonical attribute order and namespace checks.

use clap::{Parser, Subcommand};
use sorteringen::c14n;
use sorteringen::core::Error;
use sorteringen::xml::XmlDocument;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "sorteringen",
    about = "sorteringen: Canonical XML attribute ordering",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every element's start tag with attributes in canonical order
    Order {
        /// Input XML file
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a document for relative namespace declarations
    Check {
        /// Input XML file
        file: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Describe the ordering rules
    Info,
}

fn main() {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Commands::Order { verbose, .. } | Commands::Check { verbose, .. } => *verbose,
        Commands::Info => false,
    };
    init_logging(verbose);

    let result = match cli.command {
        Commands::Order { file, output, .. } => cmd_order(file, output),
        Commands::Check { file, .. } => cmd_check(file),
        Commands::Info => cmd_info(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn cmd_order(file: PathBuf, output: Option<PathBuf>) -> Result<(), Error> {
    log::info!("Ordering: {}", file.display());
    let xml = XmlDocument::from_file(&file)?;
    let doc = xml.parse_doc()?;

    let mut out = String::new();
    for node in doc.descendants().filter(|n| n.is_element()) {
        out.push_str(&c14n::canonical_start_tag(node)?);
        out.push('\n');
    }
    write_output(output, out.as_bytes())
}

fn cmd_check(file: PathBuf) -> Result<(), Error> {
    log::info!("Checking: {}", file.display());
    let xml = XmlDocument::from_file(&file)?;
    let doc = xml.parse_doc()?;

    match c14n::check_document(&doc) {
        Ok(()) => {
            println!("OK");
            Ok(())
        }
        Err(e @ Error::RelativeNamespace { .. }) => {
            eprintln!("INVALID: {e}");
            process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn cmd_info() -> Result<(), Error> {
    println!("sorteringen: Canonical XML attribute ordering");
    println!();
    println!("Order of an element's attribute axis:");
    println!("  1. Namespace declarations, by prefix (default namespace first)");
    println!("  2. Attributes without a namespace, by qualified name");
    println!("  3. Namespaced attributes, by namespace URI then local name");
    println!();
    println!("Names compare by Unicode code point.");
    println!();
    println!("Namespace values are absolute when empty or when a scheme");
    println!("precedes the first ':'. Relative declarations are rejected.");
    Ok(())
}

// ── Utility functions ────────────────────────────────────────────────

fn write_output(path: Option<PathBuf>, data: &[u8]) -> Result<(), Error> {
    match path {
        Some(p) => {
            std::fs::write(&p, data)
                .map_err(|e| Error::io(p.display().to_string(), e))
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(data)
                .map_err(|e| Error::io("stdout", e))
        }
    }
}
