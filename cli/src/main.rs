use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use man_nav_analysis::{CrossReference, cross_references, fold_regions};
use man_nav_core::{ADDRESS_SCHEME, ManEntry, parse_address, parse_listing};
use man_nav_source::{ManRunner, ManualSource};

/// Output format for structured results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "man-nav")]
#[command(about = "Browse man pages with cross-reference links and fold regions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and print a rendered manual page.
    Page(PageArgs),
    /// List entries from the manual keyword index.
    List(ListArgs),
    /// Print cross-reference link spans for a page.
    Links(AnalyzeArgs),
    /// Print section fold regions for a page.
    Folds(AnalyzeArgs),
}

#[derive(Debug, Args)]
struct PageArgs {
    /// Page name or `man:` address (e.g. `ls` or `man:ls (1)`).
    name: String,
    /// Manual section (ignored when the name is an address).
    #[arg(long, default_value = "1")]
    section: String,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Keep only entries whose name contains this substring.
    #[arg(long)]
    contains: Option<String>,
    /// Print `man:` addresses instead of name/section pairs.
    #[arg(long)]
    addresses: bool,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Page name or `man:` address; may be omitted with --input.
    name: Option<String>,
    /// Manual section (ignored when the name is an address).
    #[arg(long, default_value = "1")]
    section: String,
    /// Analyze a pre-rendered text file instead of invoking the renderer.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Page(args) => run_page(args),
        Command::List(args) => run_list(args),
        Command::Links(args) => run_links(args),
        Command::Folds(args) => run_folds(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_page(args: PageArgs) -> Result<(), String> {
    let entry = resolve_entry(&args.name, &args.section)?;
    let page = fetch_rendered(&entry)?;
    print!("{page}");
    Ok(())
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let lines = ManRunner::default()
        .list_all()
        .map_err(|err| err.to_string())?;
    let mut entries = parse_listing(lines.iter().map(String::as_str));
    if let Some(needle) = &args.contains {
        entries.retain(|entry| entry.name.contains(needle.as_str()));
    }

    match args.format {
        OutputFormat::Json if args.addresses => {
            let addresses: Vec<String> = entries.iter().map(ManEntry::address).collect();
            println!("{}", to_pretty_json(&addresses)?);
        }
        OutputFormat::Json => println!("{}", to_pretty_json(&entries)?),
        OutputFormat::Table => {
            for entry in &entries {
                if args.addresses {
                    println!("{}", entry.address());
                } else {
                    println!("{entry}");
                }
            }
        }
    }
    Ok(())
}

fn run_links(args: AnalyzeArgs) -> Result<(), String> {
    let page = load_page(&args)?;
    let refs: Vec<CrossReference> = cross_references(&page).collect();

    match args.format {
        OutputFormat::Json => println!("{}", to_pretty_json(&refs)?),
        OutputFormat::Table => {
            println!("{:>5}  {:>5}  {:>5}  TARGET", "LINE", "COL", "LEN");
            for reference in &refs {
                println!(
                    "{:>5}  {:>5}  {:>5}  {}",
                    reference.span.line,
                    reference.span.start_column,
                    reference.span.length,
                    reference.entry.address()
                );
            }
        }
    }
    Ok(())
}

fn run_folds(args: AnalyzeArgs) -> Result<(), String> {
    let page = load_page(&args)?;
    let regions = fold_regions(&page).map_err(|err| err.to_string())?;

    match args.format {
        OutputFormat::Json => println!("{}", to_pretty_json(&regions)?),
        OutputFormat::Table => {
            println!("{:>5}  {:>5}", "START", "END");
            for region in &regions {
                println!("{:>5}  {:>5}", region.start_line, region.end_line);
            }
        }
    }
    Ok(())
}

/// Accepts either a bare page name or a full `man:` address.
fn resolve_entry(name: &str, section: &str) -> Result<ManEntry, String> {
    if name.starts_with(ADDRESS_SCHEME) {
        parse_address(name).map_err(|err| err.to_string())
    } else {
        Ok(ManEntry::new(name, section))
    }
}

fn fetch_rendered(entry: &ManEntry) -> Result<String, String> {
    ManRunner::default()
        .fetch_page(&entry.name, &entry.section)
        .map_err(|err| err.to_string())
}

fn load_page(args: &AnalyzeArgs) -> Result<String, String> {
    if let Some(path) = &args.input {
        return fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()));
    }
    let name = args
        .name
        .as_deref()
        .ok_or_else(|| "Specify a page name or --input".to_string())?;
    let entry = resolve_entry(name, &args.section)?;
    fetch_rendered(&entry)
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("Failed to serialize output: {err}"))
}
