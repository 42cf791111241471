//! `masthead config`: read and write the CLI config file

use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one setting (roster, format)
    Get { key: String },
    /// Change one setting and save the file
    Set { key: String, value: String },
    /// Print every setting
    List,
    /// Print where the config file lives
    Path,
    /// Write an empty config file
    Init {
        /// Replace a file that already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, mut config: Config) -> anyhow::Result<()> {
    let path = config_file_path();

    match &args.command {
        ConfigCommands::Get { key } => println!("{}", config.display_value(key)?),
        ConfigCommands::Set { key, value } => {
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::List => {
            println!("# {}", path.display());
            for key in Config::keys() {
                println!("{} = {}", key, config.display_value(key)?);
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists, pass --force to replace it",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Created config file at {}", path.display());
        }
    }

    Ok(())
}
