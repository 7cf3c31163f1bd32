use clap::{Parser, Subcommand};
use fitcalc_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Package batch file (.json or .csv); defaults to the built-in demo batch
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report failing packages and continue with the rest
    #[arg(long, global = true)]
    keep_going: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one summary line per package (default)
    Report,

    /// List supported workout codes and their parameters
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        fitcalc_core::logging::init_with_level("debug");
    } else {
        fitcalc_core::logging::init();
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Kinds) => {
            cmd_kinds();
            Ok(())
        }
        Some(Commands::Report) | None => {
            let format = match cli.format {
                Some(ref f) => f.parse()?,
                None => config.output.format,
            };
            let input = cli.input.or_else(|| config.input.packages_file.clone());
            cmd_report(input, format, cli.keep_going)
        }
    }
}

fn cmd_report(input: Option<PathBuf>, format: OutputFormat, keep_going: bool) -> Result<()> {
    let packages = match input {
        Some(ref path) => load_packages(path)?,
        None => demo_packages().to_vec(),
    };

    let mut failed = 0;
    for (index, package) in packages.iter().enumerate() {
        let info = match package.to_workout() {
            Ok(workout) => workout.show_training_info(),
            Err(e) if keep_going => {
                tracing::warn!("Package {} rejected: {}", index + 1, e);
                eprintln!("Package {} ({}): {}", index + 1, package.code, e);
                failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match format {
            OutputFormat::Text => println!("{}", info.get_message()),
            OutputFormat::Json => println!("{}", info.to_json()?),
        }
    }

    if failed > 0 {
        return Err(Error::BatchFailed {
            failed,
            total: packages.len(),
        });
    }

    Ok(())
}

fn cmd_kinds() {
    for kind in WorkoutKind::ALL {
        println!(
            "{}  {:<14} {}",
            kind.code(),
            kind.label(),
            kind.fields().join(", ")
        );
    }
}
