use anyhow::Context;
use clap::Parser;
use rodlayout::commands;
use rodlayout::{init_logging, CellView, Config, LayoutFile};
use std::path::PathBuf;

/// Draw layout files into Virtuoso cell views.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Configuration file (.toml or .json), defaults to the user config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Cell view variable, overriding the layout file and configuration
    #[arg(long, global = true)]
    cell_view: Option<CellView>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Command {
    /// Writes a SKILL script that draws the layout.
    Script {
        /// The layout file (.toml or .json).
        layout: PathBuf,
        /// Output script, stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Prints the calls drawing the layout would issue.
    DryRun {
        /// The layout file (.toml or .json).
        layout: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    tracing::debug!(
        "rodlayout {} (built {})",
        rodlayout::VERSION,
        rodlayout::BUILD_DATE
    );

    match cli.command {
        Command::Script { layout, output } => {
            let file = LayoutFile::load_from_file(&layout)?;
            let script = commands::render_script(&file, &config, cli.cell_view.as_ref())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, script)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => print!("{}", script),
            }
        }
        Command::DryRun { layout } => {
            let file = LayoutFile::load_from_file(&layout)?;
            for call in commands::dry_run(&file, &config, cli.cell_view.as_ref())? {
                println!("{}", call);
            }
        }
    }

    Ok(())
}
