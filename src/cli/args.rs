//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{NodeCategory, TreeView};

/// Gang-of-Four design pattern demonstrations with an organisation tree explorer
#[derive(Parser, Debug)]
#[command(name = "gof-demo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Additional config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one pattern demonstration
    Run {
        /// Pattern name (e.g. bridge, factory-method) or number 1-23 (default: from config)
        pattern: Option<String>,
    },

    /// List all 23 GoF patterns
    List,

    /// Show the organisation hierarchy as a tree
    Tree {
        /// Hierarchy TOML file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Query the hierarchy through a view
    View {
        /// View: ancestor, descendants, filtered, sibling
        view: TreeView,

        /// Start node, by id or name
        #[arg(long)]
        from: String,

        /// Category to include (repeatable; default: department, team, project)
        #[arg(long = "category")]
        categories: Vec<NodeCategory>,

        /// Deepest level included by descendants/filtered views
        #[arg(long)]
        max_depth: Option<usize>,

        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,

        /// Include hidden nodes
        #[arg(long)]
        include_hidden: bool,

        /// Include inactive nodes
        #[arg(long)]
        include_inactive: bool,

        /// Hierarchy TOML file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
