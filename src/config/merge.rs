//! CLI argument merging with config

use super::Config;

/// Values given on the command line. `None` leaves the layered value alone.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub no_git: Option<bool>,
    pub all: Option<bool>,
    pub no_dotfiles: Option<bool>,
    pub tree: Option<bool>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(no_git) = cli.no_git {
        base_config.no_git = no_git;
    }
    if let Some(all) = cli.all {
        base_config.all = all;
    }
    if let Some(no_dotfiles) = cli.no_dotfiles {
        base_config.no_dotfiles = no_dotfiles;
    }
    if let Some(tree) = cli.tree {
        base_config.tree = tree;
    }

    if let Some(include) = cli.include {
        base_config.include = include;
    }
    if let Some(exclude) = cli.exclude {
        base_config.exclude = exclude;
    }

    base_config
}
