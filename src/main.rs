use anyhow::{Context, Result};
use clap::Parser;
use glocate::ui::Terminal;
use glocate::{initialize, observability, Config, ProcessGateway, Session, Theme};
use std::path::PathBuf;

/// Command-line arguments accepted by the `glocate` binary.
///
/// Every setting overrides the config file value of the same name.
#[derive(Parser, Debug)]
#[command(
    name = "glocate",
    version,
    about = "Interactive terminal front-end for locate"
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GLOCATE_CONFIG",
        help = "Configuration file (default: <config dir>/glocate/config.toml)"
    )]
    config: Option<PathBuf>,
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        help = "Maximum number of results requested from locate (default: 50)"
    )]
    result_limit: Option<usize>,
    #[arg(
        long,
        value_name = "N",
        help = "Debounce typing when the result limit exceeds this (default: 1000)"
    )]
    delay_limit: Option<usize>,
    #[arg(
        long = "delay",
        value_name = "MS",
        help = "Quiet interval before a debounced search fires (default: 1000)"
    )]
    search_delay_ms: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Only show results under this directory (default: none)"
    )]
    dir: Option<String>,
    #[arg(long, value_name = "THEME", help = "Select a built-in theme by name")]
    theme: Option<String>,
    #[arg(long, value_name = "FILE", help = "Load the theme from a TOML file")]
    theme_file: Option<String>,
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Trace level written to the trace file (default: info)"
    )]
    trace_level: Option<String>,
    #[arg(long, help = "List built-in themes and exit")]
    list_themes: bool,
}

impl Cli {
    /// Overlays the flags that were given onto `config`.
    fn apply(self, config: &mut Config) {
        if let Some(limit) = self.result_limit {
            config.result_limit = limit;
        }
        if let Some(limit) = self.delay_limit {
            config.delay_limit = limit;
        }
        if let Some(delay) = self.search_delay_ms {
            config.search_delay_ms = delay;
        }
        if self.dir.is_some() {
            config.initial_dir = self.dir;
        }
        if self.theme.is_some() {
            config.theme_name = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::BUILT_IN {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);

    observability::init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "glocate starting");

    let state = initialize(&config);
    let theme = state.theme.clone();
    let mut session = Session::new(state, ProcessGateway::new(&config));

    let mut terminal = Terminal::enter(theme).context("failed to set up the terminal")?;
    let outcome = terminal.run(&mut session);
    drop(terminal);

    outcome.context("terminal error")?;
    tracing::info!("glocate exiting");
    Ok(())
}
