mod client;
mod config;
mod errors;
mod files;
mod form;
mod validation;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::HttpScorer;
use crate::config::Config;
use crate::files::{SelectedFile, Slot};
use crate::form::{ScorerForm, SubmissionState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("ATS Resume Scorer v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let (Some(resume_path), Some(job_desc_path)) = (args.next(), args.next()) else {
        bail!("usage: scorer <resume-file> <job-description-file>");
    };

    let scorer = HttpScorer::new(&config);
    info!("Scoring endpoint: {}", config.scoring_url);

    let mut form = ScorerForm::new();
    form.select_file(Slot::Resume, SelectedFile::from_path(&resume_path).await?);
    form.select_file(
        Slot::JobDescription,
        SelectedFile::from_path(&job_desc_path).await?,
    );

    form.submit(&scorer).await;

    match form.state() {
        SubmissionState::Succeeded(text) => {
            // Score text goes to stdout exactly as the endpoint sent it.
            println!("{text}");
            Ok(())
        }
        SubmissionState::Failed(message) => bail!("{message}"),
        state => bail!("submit ended in unexpected state {state:?}"),
    }
}
