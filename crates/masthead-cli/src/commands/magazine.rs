//! Magazine commands

use clap::{Args, Subcommand};

use crate::output::render_list;
use crate::AppContext;
use masthead_core::{Article, ArticleRecord, Author, AuthorRecord};

#[derive(Args)]
pub struct MagazineArgs {
    #[command(subcommand)]
    pub command: MagazineCommands,
}

#[derive(Subcommand)]
pub enum MagazineCommands {
    /// List a magazine's articles
    Articles {
        /// Magazine name
        name: String,
    },
    /// List everyone who has written for a magazine
    Contributors {
        /// Magazine name
        name: String,
    },
    /// List the titles published in a magazine
    Titles {
        /// Magazine name
        name: String,
    },
    /// List authors with more than two articles in a magazine
    TopAuthors {
        /// Magazine name
        name: String,
    },
}

fn author_records(authors: Option<Vec<Author>>) -> Option<Vec<AuthorRecord>> {
    authors.map(|authors| authors.iter().map(Author::record).collect())
}

pub fn run(args: &MagazineArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let output = match &args.command {
        MagazineCommands::Articles { name } => {
            let magazine = ctx.roster.magazine(name)?;
            let records: Vec<ArticleRecord> = magazine
                .articles(&ctx.registry)
                .iter()
                .map(Article::record)
                .collect();
            render_list(Some(&records[..]), ctx.format, |r| {
                format!("{} by {}", r.title, r.author.name)
            })
        }
        MagazineCommands::Contributors { name } => {
            let magazine = ctx.roster.magazine(name)?;
            let records = author_records(magazine.contributors(&ctx.registry));
            render_list(records.as_deref(), ctx.format, |r| r.name.clone())
        }
        MagazineCommands::Titles { name } => {
            let magazine = ctx.roster.magazine(name)?;
            let titles = magazine.article_titles(&ctx.registry);
            render_list(titles.as_deref(), ctx.format, String::clone)
        }
        MagazineCommands::TopAuthors { name } => {
            let magazine = ctx.roster.magazine(name)?;
            let records = author_records(magazine.contributing_authors(&ctx.registry));
            render_list(records.as_deref(), ctx.format, |r| r.name.clone())
        }
    };

    println!("{}", output);
    Ok(())
}
