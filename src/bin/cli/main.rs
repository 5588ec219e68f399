use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use wellness_portfolio::{
    adapters::{
        inbound::web::render_page,
        outbound::{
            contact::HttpContactGateway,
            content::{RemoteContentProvider, StaticContentProvider},
        },
    },
    domain::models::{ContactDraft, ContactSubmission, PortfolioContent, Readiness},
    ports::{contact::ContactGateway, content::ContentProvider},
    services::ContactForm,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-cli")]
#[command(about = "CLI for rendering the portfolio and talking to the portfolio server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "BACKEND_URL", default_value = "http://localhost:8001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the page to HTML
    Render {
        /// Content JSON file; the bundled content when omitted
        #[arg(short, long)]
        content: Option<PathBuf>,
        /// Fetch the content from the server instead
        #[arg(long, conflicts_with = "content")]
        remote: bool,
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a content JSON file
    Validate {
        /// Content JSON file
        file: PathBuf,
    },

    /// Send a contact message to the server
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Service key, e.g. prenatal-yoga
        #[arg(long)]
        service: String,
        #[arg(long)]
        message: String,
    },

    /// List stored contact submissions
    Submissions {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            content,
            remote,
            output,
        } => {
            let provider: Arc<dyn ContentProvider> = match (content, remote) {
                (_, true) => Arc::new(RemoteContentProvider::new(&cli.url)),
                (Some(path), false) => Arc::new(StaticContentProvider::new(read_content(&path)?)?),
                (None, false) => Arc::new(StaticContentProvider::bundled()?),
            };
            let content = provider
                .fetch()
                .await
                .with_context(|| format!("Failed to load content from {}", provider.describe()))?;

            let html = render_page(
                &Readiness::Ready(Arc::new(content)),
                ContactForm::new().view(),
            );
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }

        Commands::Validate { file } => {
            let content = read_content(&file)?;
            println!("{} is valid", file.display());
            println!("  brand:          {}", content.brand());
            println!("  services:       {}", content.services.len());
            println!("  experience:     {}", content.experience.len());
            println!("  certifications: {}", content.certifications.len());
            println!("  testimonials:   {}", content.testimonials.len());
        }

        Commands::Contact {
            name,
            email,
            service,
            message,
        } => {
            let submission = ContactDraft::builder()
                .name(name)
                .email(email)
                .service(service)
                .message(message)
                .build()
                .validate()?;

            let ack = HttpContactGateway::new(&cli.url)
                .deliver(submission)
                .await?;
            println!("{}", ack.title);
            println!("{}", ack.message);
            if let Some(id) = ack.id {
                println!("Submission id: {}", id);
            }
        }

        Commands::Submissions { limit } => {
            let url = format!(
                "{}/api/contact-submissions?limit={}",
                cli.url.trim_end_matches('/'),
                limit
            );
            let response = reqwest::get(&url)
                .await
                .with_context(|| format!("Failed to reach {}", url))?;
            if !response.status().is_success() {
                bail!("{} answered with status {}", url, response.status());
            }

            let submissions: Vec<ContactSubmission> = response.json().await?;
            if submissions.is_empty() {
                println!("No submissions");
            }
            for submission in submissions {
                println!(
                    "{}  {}  {} <{}>  [{}]",
                    submission.submitted_at.format("%Y-%m-%d %H:%M"),
                    submission.id,
                    submission.name,
                    submission.email,
                    submission.service,
                );
                println!("    {}", submission.message);
            }
        }
    }

    Ok(())
}

fn read_content(path: &Path) -> Result<PortfolioContent> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    PortfolioContent::from_json(&bytes)
        .with_context(|| format!("{} is not valid portfolio content", path.display()))
}
