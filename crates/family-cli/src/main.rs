use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use family_core::Registry;
use family_viz::FamilyGraph;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "family")]
#[command(about = "Family tree queries and rendering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// How the second person relates to the first, by blood
    Relationship {
        /// Family JSON file
        file: PathBuf,
        /// Identifier of the first person
        first: String,
        /// Identifier of the second person
        second: String,
    },

    /// List a person's ancestors, one line per generation
    Ancestors {
        /// Family JSON file
        file: PathBuf,
        /// Identifier of the person
        id: String,
    },

    /// Show a person's summary box
    Show {
        /// Family JSON file
        file: PathBuf,
        /// Identifier of the person
        id: String,
    },

    /// Render the family graph as Graphviz DOT
    Render {
        /// Family JSON file
        file: PathBuf,
        /// Write DOT here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Relationship {
            file,
            first,
            second,
        } => {
            let registry = load(&file)?;
            let label = registry.relationship(&first, &second)?;
            println!("{label}");
        }
        Commands::Ancestors { file, id } => {
            let registry = load(&file)?;
            let person = registry.get(&id)?;
            let generations = registry.ancestors(person)?;
            if generations.is_empty() {
                println!("{id} has no recorded ancestors");
            }
            for (depth, generation) in generations.iter().enumerate() {
                let mut members: Vec<&str> = generation.iter().map(String::as_str).collect();
                members.sort_unstable();
                println!("generation {depth}: {}", members.join(", "));
            }
        }
        Commands::Show { file, id } => {
            let registry = load(&file)?;
            let person = registry.get(&id)?;
            println!("{}", family_viz::text_box(person));
        }
        Commands::Render { file, output } => {
            let registry = load(&file)?;
            let dot = FamilyGraph::build(&registry)?.to_dot();
            match output {
                Some(path) => {
                    fs::write(&path, dot)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => print!("{dot}"),
            }
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<Registry> {
    Registry::from_json_file(file)
        .with_context(|| format!("failed to load family from {}", file.display()))
}
