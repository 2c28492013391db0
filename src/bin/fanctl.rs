//! CLI administration tool for fan-registry.
//!
//! Runs the same validators and record store as the HTTP service, without
//! going through the API.
//!
//! # Usage
//!
//! ```bash
//! # Check a CPF
//! cargo run --bin fanctl -- cpf 529.982.247-25
//!
//! # Check a social profile link
//! cargo run --bin fanctl -- link https://instagram.com/someuser
//!
//! # List registered fans
//! cargo run --bin fanctl -- list
//!
//! # Cross-check an identity document
//! cargo run --bin fanctl -- check-document rg.png --name "Maria Silva" --cpf 529.982.247-25
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `FANS_CSV_PATH`, `TESSERACT_CMD`, `DOCUMENT_MAX_BYTES`.

use fan_registry::config;
use fan_registry::domain::document::{Document, DocumentCheck, TextExtractor, check_document_text};
use fan_registry::domain::repositories::FanRepository;
use fan_registry::infrastructure::persistence::CsvFanRepository;
use fan_registry::server::build_extractor;
use fan_registry::utils::cpf::{format_cpf, normalize_cpf, validate_cpf};
use fan_registry::utils::social_link::validate_social_link;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI tool for managing fan-registry.
#[derive(Parser)]
#[command(name = "fanctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CPF (any formatting)
    Cpf {
        /// CPF to check, e.g. 529.982.247-25
        value: String,
    },

    /// Validate an Instagram, Twitter/X or TikTok profile link
    Link {
        /// Link to check
        url: String,
    },

    /// List registered fans
    List,

    /// Extract text from an identity document and look for name and CPF
    CheckDocument {
        /// Image file (jpg, jpeg, png)
        path: PathBuf,

        /// Declared full name
        #[arg(short, long)]
        name: String,

        /// Declared CPF, as it should appear on the document
        #[arg(short, long)]
        cpf: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let ok = match cli.command {
        Commands::Cpf { value } => check_cpf(&value),
        Commands::Link { url } => check_link(&url),
        Commands::List => list_fans().await?,
        Commands::CheckDocument { path, name, cpf } => check_document(path, &name, &cpf).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn check_cpf(value: &str) -> bool {
    let valid = validate_cpf(value);
    let shown = format_cpf(value).unwrap_or_else(|| normalize_cpf(value));

    if valid {
        println!("{} {}", "✅ Valid CPF:".green().bold(), shown.cyan());
    } else {
        println!("{} {}", "❌ Invalid CPF:".red().bold(), shown.yellow());
    }

    valid
}

fn check_link(url: &str) -> bool {
    let valid = validate_social_link(url);

    if valid {
        println!("{} {}", "✅ Valid link:".green().bold(), url.trim().cyan());
    } else {
        println!("{} {}", "❌ Invalid link:".red().bold(), url.trim().yellow());
        println!(
            "   {}",
            "Expected https://[www.]instagram.com|twitter.com|tiktok.com|x.com/<handle>".dimmed()
        );
    }

    valid
}

async fn list_fans() -> Result<bool> {
    let config = config::load_from_env()?;
    let repo = CsvFanRepository::new(&config.fans_csv_path);

    let fans = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", repo.path().display(), e))?;

    println!("{}", "📋 Registered fans".bright_blue().bold());
    println!();

    if fans.is_empty() {
        println!("{}", "⚠️  No fans registered yet.".yellow());
        return Ok(true);
    }

    for fan in &fans {
        println!(
            "  {} {} {}",
            fan.name.bright_white().bold(),
            format_cpf(&fan.cpf).unwrap_or_else(|| fan.cpf.clone()).cyan(),
            fan.birth_date.format("%d/%m/%Y").to_string().dimmed()
        );
        for link in [&fan.instagram, &fan.twitter, &fan.tiktok].into_iter().flatten() {
            println!("      {}", link);
        }
    }

    println!();
    println!("Total: {}", fans.len().to_string().bold());

    Ok(true)
}

async fn check_document(path: PathBuf, name: &str, cpf: &str) -> Result<bool> {
    let config = config::load_from_env()?;

    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path.to_string_lossy().into_owned();
    let document = Document::from_bytes(filename, bytes, config.document_max_bytes)?;

    let extractor = build_extractor(&config);
    let Some(text) = extractor.extract_text(&document).await? else {
        println!(
            "{}",
            "⚠️  TESSERACT_CMD is not set; nothing to check.".yellow()
        );
        return Ok(false);
    };

    match check_document_text(&text, name, cpf) {
        DocumentCheck::Verified => {
            println!("{}", "✅ Name and CPF found in document".green().bold());
            Ok(true)
        }
        outcome => {
            let message = outcome.mismatch_message().unwrap_or("Document was not checked");
            println!("{} {}", "❌".red(), message.red().bold());
            Ok(false)
        }
    }
}
