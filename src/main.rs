use std::path::PathBuf;

use clap::{Parser, Subcommand};
use update_cask::{AppError, CaskVariant, RenderMode, RenderOptions};

#[derive(Parser)]
#[command(name = "update-cask")]
#[command(version)]
#[command(
    about = "Render the ai-review Homebrew cask from VERSION, SHA_ARM and SHA_INTEL",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Casks/ai-review.rb from the environment (default)
    #[clap(visible_alias = "r")]
    Render {
        /// Cask layout: dual (arm + intel) or single (arm only)
        #[arg(long, default_value = "dual")]
        variant: CaskVariant,
        /// Write to this path instead of Casks/ai-review.rb
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the cask instead of writing it
        #[arg(long, conflicts_with = "check")]
        stdout: bool,
        /// Fail if the cask on disk differs from the rendered one
        #[arg(long)]
        check: bool,
    },
    /// Print SHA-256 checksums of release artifacts
    #[clap(visible_alias = "d")]
    Digest {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None => update_cask::render(RenderOptions::default()).map(|_| ()),
        Some(Commands::Render { variant, output, stdout, check }) => {
            let mode = if check {
                RenderMode::Check
            } else if stdout {
                RenderMode::Stdout
            } else {
                RenderMode::Write
            };
            update_cask::render(RenderOptions { variant, output, mode }).map(|_| ())
        }
        Some(Commands::Digest { files }) => update_cask::digest(files.as_slice()).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
