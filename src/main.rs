/// Main entry point for the contact book
///
/// This file sets up logging, parses command line arguments, and starts
/// the interactive session over stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use contact_book::ContactBookApp;

/// Command line arguments for the contact book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the contacts file
    /// If not provided, uses contacts.json in the working directory
    #[arg(long)]
    contacts: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("contact_book={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting contact book");

    // Determine contacts file path
    let contacts_path = match args.contacts {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => PathBuf::from("contacts.json"),
    };

    info!("Using contacts file at: {}", contacts_path.display());

    // Load the book and run the interactive session
    let app = ContactBookApp::new(contacts_path)?;
    app.run().await?;

    info!("Contact book shutdown complete");
    Ok(())
}
