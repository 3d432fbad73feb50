use std::fs::{self, create_dir_all};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::config::Config;
use common::logger::init_logger;
use lfx_parser::archive_parser::parse_archive;
use lfx_parser::readme_parser::parse_readme;
use lfx_parser::report::build_report;
use lfx_parser::stats::compute_stats;
use lfx_parser::table_renderer::generate_table;
use log::info;

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the mentorship README markdown file
    input: String,
    /// Print the parsed records as JSON (debug)
    #[arg(long)]
    print_records: bool,
    /// Output file path. Defaults to OUTPUT_PATH from the environment
    #[arg(long)]
    out: Option<String>,
    /// Term label composed into project links. Defaults to TERM_LABEL
    #[arg(long)]
    term: Option<String>,
    /// Output format: markdown table or JSON report
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
    /// Treat the input as the historical archive and emit program stats
    #[arg(long)]
    archive: bool,
}

fn main() -> Result<()> {
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);

    let args = Args::parse();
    info!("starting {}", config.project_name);

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;

    let rendered = if args.archive {
        let projects = parse_archive(&content);
        info!("parsed {} archive projects from {}", projects.len(), args.input);

        if args.print_records {
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }

        serde_json::to_string_pretty(&compute_stats(&projects))?
    } else {
        let records = parse_readme(&content);
        info!("parsed {} project records from {}", records.len(), args.input);

        if args.print_records {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }

        let term_label = args.term.unwrap_or_else(|| config.term_label.clone());
        match args.format {
            OutputFormat::Markdown => generate_table(&records, &term_label),
            OutputFormat::Json => serde_json::to_string_pretty(&build_report(records))?,
        }
    };

    println!("{rendered}");

    let out_path = args.out.unwrap_or_else(|| config.output_path.clone());
    save_output(&rendered, &out_path)?;
    info!("saved output to {}", out_path);

    Ok(())
}

fn save_output(rendered: &str, path_str: &str) -> Result<()> {
    let path = Path::new(path_str);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
}
