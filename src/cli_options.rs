use crate::commands;
use camino::Utf8PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Look up Overwatch career profiles")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "Utf8PathBuf::from(\"./owstats.toml\")"
    )]
    pub config: Utf8PathBuf,

    #[argh(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    Profile(commands::profile::Options),
    Search(commands::search::Options),
}
