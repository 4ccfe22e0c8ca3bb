use clap::{Parser, Subcommand};
use tracing::{error, info};

use bandforge::GenerateOptions;

#[derive(Parser)]
#[command(name = "bandforge")]
#[command(version)]
#[command(
    about = "Fabricate a fictional band and render its fan page",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a band profile, backstory, discography, photo, and page
    #[clap(visible_alias = "g")]
    Generate {
        /// Seed for prompt/font randomization (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,
        /// Run offline with scripted completions and a placeholder photo
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = bandforge::init_logging(&cwd) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Execution started.");

    let result = match cli.command {
        Commands::Generate { seed, dry_run } => {
            let options = GenerateOptions { seed };
            if dry_run {
                bandforge::generate_dry_run(&options)
            } else {
                bandforge::generate(&options)
            }
        }
    };

    match result {
        Ok(run) => {
            info!("Execution completed: '{}' written to {}", run.band_name, run.project_dir.display());
            println!(
                "✅ Generated '{}' ({} member(s), {} album(s)) at {}/",
                run.band_name,
                run.member_count,
                run.album_count,
                run.project_dir.display()
            );
        }
        Err(e) => {
            error!("An error occurred during execution: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
