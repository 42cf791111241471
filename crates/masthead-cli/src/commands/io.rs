//! Roster check and registry export commands

use std::path::PathBuf;

use clap::Args;

use crate::AppContext;
use masthead_core::ArticleRegistry;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_check(ctx: &AppContext) -> anyhow::Result<()> {
    println!(
        "Loaded {} authors, {} magazines and {} articles from {}",
        ctx.roster.authors().len(),
        ctx.roster.magazines().len(),
        ctx.registry.len(),
        ctx.roster_path.display()
    );
    Ok(())
}

pub fn run_export(args: &ExportArgs, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::info!("Exporting registry");

    let snapshot = ctx.registry.export();
    let json = serde_json::to_string_pretty(&snapshot)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!(
                "Exported {} articles to {}",
                snapshot.articles.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
