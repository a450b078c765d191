//! CLI entry point for repair-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repair_site::{commands, server, Site};

#[derive(Parser)]
#[command(name = "repair-site")]
#[command(version)]
#[command(about = "Markdown content pipeline for the Vadim Group repair website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages or blog articles
    List {
        /// Type of content to list (pages, blog)
        #[arg(default_value = "pages")]
        r#type: String,
    },

    /// Print the assembled data for one page as JSON
    Show {
        /// Page identifier (home, home-repairs, marine-rv, faq, blog, header, footer, ...)
        page: String,
    },

    /// Write rendered articles, legal pages and page data
    #[command(alias = "g")]
    Generate,

    /// Remove the public folder
    Clean,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "repair_site=debug,info"
    } else {
        "repair_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = Site::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            commands::list::run(&site, &r#type)?;
        }

        Commands::Show { page } => {
            commands::show::run(&site, &page)?;
        }

        Commands::Generate => {
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Server { port, ip } => {
            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(site, &ip, port).await?;
        }
    }

    Ok(())
}
