use clap::{Parser, Subcommand};
use matlens::registry::NodeRegistry;
use matlens::report::ReportGenerator;
use matlens::scene::loader;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a material node report for a scene file
    Report {
        /// Path to the scene YAML/JSON file
        file: PathBuf,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the registered builtin node types
    Types,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Report { file, out } => {
            info!("Loading scene from: {:?}", file);
            let scene = loader::load_scene(file)?;

            let registry = NodeRegistry::builtin();
            let mut generator = ReportGenerator::new(&registry);
            let report = generator.generate(&scene);

            match out {
                Some(path) => {
                    fs::write(path, &report)?;
                    info!("Report written to: {:?}", path);
                }
                None => println!("{}", report),
            }
        }
        Commands::Types => {
            let registry = NodeRegistry::builtin();
            for kind in registry.kinds() {
                println!("{}", kind);
            }
        }
    }

    Ok(())
}
