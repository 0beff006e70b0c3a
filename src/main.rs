mod config;
mod error;
mod export;
mod logging;
mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use portfolio::state::content::SiteContent;
use portfolio::util::links::ContentError;

use crate::config::{DEFAULT_OUT_DIR, SiteConfig};
use crate::error::SiteError;

#[derive(Parser, Debug)]
#[command(name = "portfolio-site", about = "Static builder for the portfolio landing page")]
struct Cli {
    /// Default log level when RUST_LOG is unset.
    #[arg(long, env = "PORTFOLIO_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate content and write index.html and style.css.
    Build(BuildArgs),
    /// Validate content and list every issue.
    Check,
    /// Render the document (or the content model as JSON) to stdout.
    Print(PrintArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Render the hero in its final state with no entry transition.
    #[arg(long, env = "PORTFOLIO_REDUCED_MOTION")]
    reduced_motion: bool,

    /// wasm-bindgen output prefix to boot the browser build, e.g. `pkg/portfolio`.
    #[arg(long = "with-wasm", env = "PORTFOLIO_WASM_PKG")]
    wasm_pkg: Option<String>,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[arg(long, env = "PORTFOLIO_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args, Debug)]
struct PrintArgs {
    #[command(flatten)]
    render: RenderArgs,

    /// Print the content model as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

impl RenderArgs {
    fn into_config(self, out_dir: PathBuf) -> SiteConfig {
        SiteConfig { out_dir, reduced_motion: self.reduced_motion, wasm_pkg: self.wasm_pkg }
    }
}

fn main() -> Result<(), SiteError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let content = SiteContent::default();
    match cli.command {
        Command::Build(args) => run_build(&content, args.render.into_config(args.out_dir)),
        Command::Check => run_check(&content),
        Command::Print(args) => run_print(&content, args),
    }
}

fn run_build(content: &SiteContent, config: SiteConfig) -> Result<(), SiteError> {
    let summary = export::export_site(content, &config)?;
    println!("wrote {} ({} bytes)", summary.index_path.display(), summary.index_bytes);
    println!("wrote {}", summary.stylesheet_path.display());
    Ok(())
}

fn run_check(content: &SiteContent) -> Result<(), SiteError> {
    let issues = content.issues();
    if issues.is_empty() {
        println!("content ok: {} publication(s)", content.publications.len());
        return Ok(());
    }
    print!("{}", issue_report(&issues));
    Err(SiteError::Issues { count: issues.len() })
}

/// One line per issue; printed once on stdout, never echoed through tracing.
fn issue_report(issues: &[ContentError]) -> String {
    issues.iter().map(|issue| format!("{issue}\n")).collect()
}

fn run_print(content: &SiteContent, args: PrintArgs) -> Result<(), SiteError> {
    let output = if args.json {
        serde_json::to_string_pretty(content)?
    } else {
        content.validate()?;
        let config = args.render.into_config(PathBuf::from(DEFAULT_OUT_DIR));
        render::render_document(content, config.render_env(), &config.shell_assets())
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").map_err(|source| SiteError::Io { path: PathBuf::from("<stdout>"), source })
}
