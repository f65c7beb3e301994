#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use profilesite_app::ProfileApp;
use profilesite_app::server::{ServerConfig, run_server};
use profilesite_github::{DEFAULT_BASE_URL, GitHubClient};
use profilesite_site::{Site, SiteRoot};

#[derive(Parser)]
#[command(name = "profilesite")]
#[command(about = "Render a personal profile page from the GitHub API", long_about = None)]
struct Cli {
    /// Directory or URL holding index.html, projects.json and previous.json
    #[arg(short, long, global = true, default_value = ".")]
    site: String,

    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Give up on API requests after this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page once
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the page, rendering it fresh on every request
    Serve {
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let root: SiteRoot = cli.site.parse()?;
    let site = Site::new(root)?;
    let client = GitHubClient::with_timeout(cli.timeout_secs.map(Duration::from_secs))?
        .with_base_url(cli.api_url);
    let app = ProfileApp::new(site, client).with_fallback_token(std::env::var("GITHUB_TOKEN").ok());

    match cli.command {
        Command::Render { output } => {
            let html = app.render().await?.into_string();
            match output {
                Some(path) => tokio::fs::write(&path, html)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Serve { host, port } => {
            run_server(app, ServerConfig::new(host, port)).await?;
        }
    }

    Ok(())
}
