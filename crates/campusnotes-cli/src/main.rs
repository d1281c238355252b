//! CampusNotes CLI — upload study documents and inspect stored records.
//!
//! Requires DATABASE_URL; storage and summarizer settings come from the
//! environment as well (see campusnotes-core::config).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use campusnotes_cli::form::UploadForm;
use campusnotes_cli::{init_tracing, render_summary};
use campusnotes_core::models::{DocumentResponse, UploadRequest};
use campusnotes_core::Config;
use campusnotes_db::{setup_database, DocumentRepository, PgDocumentStore, ProfileRepository};
use campusnotes_extract::PdfTextExtractor;
use campusnotes_pipeline::{UploadPipeline, UploaderSession};
use campusnotes_storage::create_storage;
use campusnotes_summarize::{AiSummarizer, Summarize, SummarizerConfig};

#[derive(Parser)]
#[command(name = "campusnotes", about = "CampusNotes document sharing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF document with its academic metadata
    Upload {
        /// Path to the PDF file
        file: PathBuf,
        /// Uploader profile UUID
        #[arg(long)]
        user_id: Uuid,
        /// College name
        #[arg(long)]
        college_name: String,
        /// College address
        #[arg(long)]
        college_address: String,
        /// Extra institution details
        #[arg(long)]
        institution_details: Option<String>,
        /// Branch (e.g. "Computer Science")
        #[arg(long)]
        branch: String,
        /// Year of study (e.g. "2nd Year")
        #[arg(long)]
        year_of_study: String,
        /// Academic year (e.g. "2025-2026")
        #[arg(long)]
        academic_year: String,
        /// Subject name
        #[arg(long)]
        subject_name: String,
        /// Chapter or topic
        #[arg(long)]
        chapter: String,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Uploader role: student, lecturer or owner
        #[arg(long, default_value = "student")]
        role: String,
    },
    /// Fetch a stored document record by id
    Show {
        /// Document UUID
        id: Uuid,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn build_summarizer(config: &Config) -> anyhow::Result<Option<Arc<dyn Summarize>>> {
    match SummarizerConfig::from_app_config(config) {
        Some(cfg) => {
            let summarizer = AiSummarizer::new(cfg)?;
            Ok(Some(Arc::new(summarizer)))
        }
        None => {
            tracing::info!("Summarizer not configured, uploads will be saved without summaries");
            Ok(None)
        }
    }
}

async fn run_upload(
    config: &Config,
    file: PathBuf,
    user_id: Uuid,
    form: UploadForm,
) -> anyhow::Result<()> {
    let role = form.validate()?;

    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("File path has no filename")?
        .to_string();
    let data = tokio::fs::read(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let pool = setup_database(config).await?;
    let storage = create_storage(config).await?;
    let summarizer = build_summarizer(config)?;
    let store = Arc::new(PgDocumentStore::new(pool.clone()));

    let profile = ProfileRepository::new(pool)
        .get_by_id(user_id)
        .await?
        .with_context(|| format!("Profile {} not found", user_id))?;
    let session = UploaderSession::new(user_id, Some(profile.points));

    let request = UploadRequest {
        data,
        file_name,
        content_type: "application/pdf".to_string(),
        details: form.to_details(),
        upload_role: role,
    };

    let pipeline = UploadPipeline::new(
        Arc::new(PdfTextExtractor::new()),
        storage,
        summarizer,
        store,
        config.max_document_size_bytes,
        config.points_per_upload,
    );

    let mut progress = pipeline.subscribe();
    let printer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let p = *progress.borrow_and_update();
            eprintln!("[{}] {}%", p.stage.as_str(), p.percent);
            if p.stage.is_terminal() {
                break;
            }
        }
    });

    let result = pipeline.run(Some(session), request).await;
    let _ = printer.await;
    let record = result?;

    print_json(&DocumentResponse::from(record))?;
    Ok(())
}

async fn run_show(config: &Config, id: Uuid) -> anyhow::Result<()> {
    let pool = setup_database(config).await?;
    let record = DocumentRepository::new(pool)
        .get_by_id(id)
        .await?
        .with_context(|| format!("Document {} not found", id))?;

    let summary = record.ai_summary.clone();
    print_json(&DocumentResponse::from(record))?;
    if let Some(summary) = summary {
        println!("\n{}", render_summary(&summary));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            user_id,
            college_name,
            college_address,
            institution_details,
            branch,
            year_of_study,
            academic_year,
            subject_name,
            chapter,
            description,
            role,
        } => {
            let form = UploadForm {
                college_name,
                college_address,
                institution_details,
                branch,
                year_of_study,
                academic_year,
                subject_name,
                chapter,
                description,
                role,
                file: file.clone(),
            };
            run_upload(&config, file, user_id, form).await?;
        }
        Commands::Show { id } => {
            run_show(&config, id).await?;
        }
    }

    Ok(())
}
