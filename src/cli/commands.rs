//! Command dispatch: loads settings, wires services, runs the selected command.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::runner_for;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{NodeCategory, PatternType, TreeView, TreeViewOptions};
use crate::infrastructure::{InfraError, ServiceContainer};

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    output::configure(settings.color);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        None => cmd_run(&container, None),
        Some(Commands::Run { pattern }) => cmd_run(&container, pattern.as_deref()),
        Some(Commands::List) => cmd_list(),
        Some(Commands::Tree { file }) => cmd_tree(&container, file.as_deref()),
        Some(Commands::View {
            view,
            from,
            categories,
            max_depth,
            search,
            include_hidden,
            include_inactive,
            file,
        }) => {
            let options = view_options(
                categories,
                *max_depth,
                search.as_deref(),
                *include_hidden,
                *include_inactive,
            );
            cmd_view(&container, *view, from, &options, file.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "gof-demo", &mut io::stdout());
            Ok(())
        }
    }
}

/// Build view options from flags; no categories means the defaults.
pub fn view_options(
    categories: &[NodeCategory],
    max_depth: Option<usize>,
    search: Option<&str>,
    include_hidden: bool,
    include_inactive: bool,
) -> TreeViewOptions {
    let mut options = if categories.is_empty() {
        TreeViewOptions::default()
    } else {
        TreeViewOptions::with_categories(categories.iter().copied())
    };
    if let Some(depth) = max_depth {
        options = options.max_depth(depth);
    }
    if let Some(term) = search {
        options = options.search(term);
    }
    options
        .include_hidden(include_hidden)
        .include_inactive(include_inactive)
}

#[instrument(skip(container))]
fn cmd_run(container: &ServiceContainer, selector: Option<&str>) -> CliResult<()> {
    let selector = selector.unwrap_or(&container.settings.default_pattern);
    let pattern: PatternType = selector.parse()?;
    let runner = runner_for(pattern, &container.settings)?;
    info!("running pattern #{}: {}", pattern.number(), pattern);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.execute(&mut out)?;
    out.flush()
        .map_err(|e| InfraError::io("flush demo output", e))?;
    Ok(())
}

fn cmd_list() -> CliResult<()> {
    for (category, patterns) in &PatternType::ALL.iter().chunk_by(|p| p.category()) {
        output::header(&format!("{} Patterns", category));
        for pattern in patterns {
            let line = format!(
                "{:>2}. {} - {}",
                pattern.number(),
                pattern,
                pattern.description()
            );
            if pattern.has_demo() {
                output::success_detail(&line);
            } else {
                output::detail(&format!("  {}", line));
            }
        }
    }
    Ok(())
}

fn cmd_tree(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let tree = container.hierarchy.load(file)?;
    output::info(&container.hierarchy.render_tree(&tree));
    Ok(())
}

#[instrument(skip(container, options))]
fn cmd_view(
    container: &ServiceContainer,
    view: TreeView,
    from: &str,
    options: &TreeViewOptions,
    file: Option<&Path>,
) -> CliResult<()> {
    let tree = container.hierarchy.load(file)?;
    let lines = container.hierarchy.query(&tree, view, from, options)?;
    if lines.is_empty() {
        output::warning(&format!("{} view from '{}' matched no nodes", view, from));
    }
    for line in &lines {
        output::info(line);
    }
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            debug!("global config path: {}", global.display());
            let status = if global.exists() { "exists" } else { "not found" };
            output::action("Global", &format!("{} ({})", global.display(), status));
        }
    }
    Ok(())
}
