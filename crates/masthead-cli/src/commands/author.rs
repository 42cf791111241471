//! Author commands

use clap::{Args, Subcommand};

use crate::output::render_list;
use crate::AppContext;
use masthead_core::{Article, ArticleRecord, Magazine, MagazineRecord};

#[derive(Args)]
pub struct AuthorArgs {
    #[command(subcommand)]
    pub command: AuthorCommands,
}

#[derive(Subcommand)]
pub enum AuthorCommands {
    /// List an author's articles
    Articles {
        /// Author name
        name: String,
    },
    /// List the magazines an author has written for
    Magazines {
        /// Author name
        name: String,
    },
    /// List the categories an author has written in
    Topics {
        /// Author name
        name: String,
    },
}

pub fn run(args: &AuthorArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let output = match &args.command {
        AuthorCommands::Articles { name } => {
            let author = ctx.roster.author(name)?;
            let records: Vec<ArticleRecord> = author
                .articles(&ctx.registry)
                .iter()
                .map(Article::record)
                .collect();
            render_list(Some(&records[..]), ctx.format, |r| {
                format!("{} ({})", r.title, r.magazine.name)
            })
        }
        AuthorCommands::Magazines { name } => {
            let author = ctx.roster.author(name)?;
            let records: Vec<MagazineRecord> = author
                .magazines(&ctx.registry)
                .iter()
                .map(Magazine::record)
                .collect();
            render_list(Some(&records[..]), ctx.format, |r| {
                format!("{} [{}]", r.name, r.category)
            })
        }
        AuthorCommands::Topics { name } => {
            let author = ctx.roster.author(name)?;
            let topics = author.topic_areas(&ctx.registry);
            render_list(topics.as_deref(), ctx.format, String::clone)
        }
    };

    println!("{}", output);
    Ok(())
}
