use crate::config::{PageConfig, PrerenderConfig};
use crate::export;
use crate::util::env as env_util;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use saffron_site::hooks::RenderMode;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The Saffron Tree static site renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging for additional debugging information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write index.html to the output directory
    Build(BuildArgs),

    /// Print the rendered page fragment to stdout
    Print(PrintArgs),
}

/// Options shared by every command that renders the page
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Stylesheet href linked from the page
    #[arg(long, env = "SAFFRON_STYLESHEET", default_value = "/assets/tailwind.css")]
    pub stylesheet: String,

    /// Viewport height in pixels used for the initial render
    #[arg(long, env = "SAFFRON_VIEWPORT_HEIGHT", default_value_t = 800.0)]
    pub viewport_height: f64,

    #[arg(long, env = "SAFFRON_RENDER_MODE", value_enum, default_value_t = Mode::Snapshot)]
    pub mode: Mode,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory
    #[arg(long, env = "SAFFRON_OUT_DIR", default_value = "dist")]
    pub out_dir: PathBuf,

    /// Document title
    #[arg(long, env = "SAFFRON_TITLE", default_value = "The Saffron Tree | Kolkata")]
    pub title: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Scroll offset in pixels the page is rendered at
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub scroll: f64,

    #[command(flatten)]
    pub page: PageArgs,
}

/// How entrance animations behave in the exported page
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every entrance plays on load; suited to pages served without wasm
    Snapshot,
    /// Scroll-triggered entrances wait for the client
    Interactive,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Snapshot => RenderMode::Snapshot,
            Mode::Interactive => RenderMode::Interactive,
        }
    }
}

impl PageArgs {
    pub fn into_config(self) -> Result<PageConfig> {
        PageConfig::new(self.stylesheet, self.viewport_height, self.mode.into())
            .context("Invalid page options")
    }
}

impl BuildArgs {
    pub fn into_config(self) -> Result<PrerenderConfig> {
        Ok(PrerenderConfig::new(
            self.out_dir,
            self.title,
            self.page.into_config()?,
        ))
    }
}

impl PrintArgs {
    /// The page fragment as `print` writes it.
    pub fn render(self) -> Result<String> {
        let page = self.page.into_config()?.scrolled_to(self.scroll);
        debug!(offset_y = page.viewport.offset_y, mode = ?page.mode, "rendering fragment");
        Ok(page.render())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,saffron_prerender=debug"))
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Execute the CLI command
pub fn execute() -> Result<()> {
    // Load .env first so clap sees its values as environment variables
    let env_file = env_util::load_env()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match env_file {
        Some(path) => debug!(%path, "loaded environment file"),
        None => debug!("no environment file found"),
    }

    match cli.command {
        Commands::Build(args) => {
            let config = args.into_config()?;
            let path = export::write_site(&config).context("Failed to export site")?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        Commands::Print(args) => {
            println!("{}", args.render()?);
            Ok(())
        }
    }
}
