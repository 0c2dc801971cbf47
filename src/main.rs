use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use entity_generator::{export_schema, generate_entities, ExportOptions, GenerateOptions};

#[derive(Parser)]
#[command(name = "entity-generator")]
#[command(author, version, about = "Generate EF Core entities from an Excel table-definition workbook")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one C# entity file per worksheet
    Generate {
        /// Path to the .xlsx workbook
        #[arg(short, long)]
        workbook: PathBuf,

        /// Solution root the entity paths are resolved against (defaults to the current directory)
        #[arg(short, long)]
        project_root: Option<PathBuf>,
    },
    /// Export the parsed schema as JSON
    Export {
        /// Path to the .xlsx workbook
        #[arg(short, long)]
        workbook: PathBuf,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            workbook,
            project_root,
        } => {
            let project_root = match project_root {
                Some(root) => root,
                None => std::env::current_dir()?,
            };
            let options = GenerateOptions {
                workbook_path: workbook,
                project_root,
            };

            let report = generate_entities(options)?;

            println!("DbSet registrations (add to CEntityContext.cs):");
            println!();
            print!("{}", report.registration_block);
            println!(
                "Generated {} entities, skipped {} sheets",
                report.written.len(),
                report.skipped
            );
        }
        Commands::Export { workbook, output } => {
            let to_stdout = output.is_none();
            let options = ExportOptions {
                workbook_path: workbook,
                output_path: output,
            };

            let json = export_schema(options)?;
            if to_stdout {
                println!("{}", json);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` overrides `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
