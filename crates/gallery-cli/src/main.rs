//! Media Gallery CLI
//!
//! Thin wrapper around gallery-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # List everything, newest first
//! gallery list
//!
//! # Only links whose title contains "video"
//! gallery list --search video --category link
//!
//! # Show one resource
//! gallery show 12
//!
//! # Upload a file or a link
//! gallery upload --title "Cat" --file ./cat.png
//! gallery upload --title "My Video" --url https://youtu.be/abc123
//!
//! # Delete (asks first unless --yes)
//! gallery delete 12
//!
//! # Replace a description
//! gallery update 12 "taken in spring"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use gallery_core::{
    AutoConfirm, DeleteOutcome, DetailView, FilePayload, Filter, GalleryConfig, GalleryController,
    GalleryError, HttpBackend, ResourceId, UploadForm, UserPrompt,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Media Gallery - command-line client
#[derive(Parser)]
#[command(name = "gallery")]
#[command(version = "0.1.0")]
#[command(about = "Media Gallery - list, upload and manage gallery resources")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Gallery server URL (overrides the config file)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Path to a config.toml (default: <config dir>/media-gallery/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List resources, newest first
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// all, img, pdf, link or doc
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Show one resource in detail
    Show {
        /// Resource ID
        id: ResourceId,
    },

    /// Upload a file or a link
    Upload {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// File to upload
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        file: Option<PathBuf>,

        /// Link to save
        #[arg(long)]
        url: Option<String>,
    },

    /// Delete a resource
    Delete {
        /// Resource ID
        id: ResourceId,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace the description of a resource
    Update {
        /// Resource ID
        id: ResourceId,

        /// New description
        description: String,
    },
}

/// Confirms on the terminal and prints alerts to stderr
struct TerminalPrompt;

#[async_trait]
impl UserPrompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let question = format!("{} [y/N] ", message);
        if stdout.write_all(question.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
            return false;
        }

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    async fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn controller(config: &GalleryConfig, prompt: Arc<dyn UserPrompt>) -> Result<GalleryController> {
    let backend = HttpBackend::from_config(config)
        .with_context(|| format!("invalid server URL {:?}", config.server_url))?;
    Ok(GalleryController::new(Arc::new(backend), prompt).with_config(config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = GalleryConfig::load(cli.config.as_deref())?.with_server_url(cli.server);

    match cli.command {
        Commands::List { search, category } => {
            let gallery = controller(&config, Arc::new(TerminalPrompt))?;
            gallery.load_all().await?;
            gallery.set_filter(Filter::new(search.unwrap_or_default(), category.as_str()));

            let cards = gallery.visible_cards();
            if cards.is_empty() {
                println!("No resources.");
            } else {
                for card in cards {
                    println!("[{}] #{} {}", card.tag(), card.id(), card.title());
                }
            }
        }

        Commands::Show { id } => {
            let gallery = controller(&config, Arc::new(TerminalPrompt))?;
            gallery.load_all().await?;
            let resource = gallery.resource(id).ok_or(GalleryError::NotFound(id))?;
            let view = DetailView::new(&resource);

            println!("{}", view.title);
            println!("  ID: {}", view.id);
            println!("  Kind: {} ({})", resource.kind, resource.kind.tag());
            if view.editor.text().is_empty() {
                println!("  Description: (none)");
            } else {
                println!("  Description: {}", view.editor.text());
            }
            println!("  {}", view.date_label());
            println!(
                "  {}: {}",
                view.content.action(),
                gallery.resolve_url(view.content.target())
            );
        }

        Commands::Upload {
            title,
            description,
            file,
            url,
        } => {
            let gallery = controller(&config, Arc::new(TerminalPrompt))?;
            let form = match (file, url) {
                (Some(path), _) => {
                    let payload = FilePayload::read(&path)
                        .await
                        .with_context(|| format!("cannot read {}", path.display()))?;
                    UploadForm::file(title, payload)
                }
                (None, Some(url)) => UploadForm::link(title, url),
                (None, None) => return Err(GalleryError::MissingUploadSource.into()),
            }
            .with_description(description);

            gallery.submit_upload(&form).await?;
            println!("Uploaded \"{}\".", form.title);
        }

        Commands::Delete { id, yes } => {
            let prompt: Arc<dyn UserPrompt> = if yes {
                Arc::new(AutoConfirm)
            } else {
                Arc::new(TerminalPrompt)
            };
            let gallery = controller(&config, prompt)?;
            match gallery.delete_resource(id).await? {
                DeleteOutcome::Deleted => println!("Deleted #{}.", id),
                DeleteOutcome::Cancelled => println!("Cancelled."),
            }
        }

        Commands::Update { id, description } => {
            let gallery = controller(&config, Arc::new(TerminalPrompt))?;
            gallery.update_description(id, &description).await?;
            println!("Updated #{}.", id);
        }
    }

    Ok(())
}
