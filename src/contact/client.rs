//! HTTP submission of contact messages
//!
//! One POST per message, no retry. A response of any status counts as
//! delivered: the receiving endpoint is not expected to return anything
//! useful, so only transport failures are reported.

use anyhow::{Context, Result};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc as async_mpsc;
use tracing::{debug, error, info};

use super::ContactMessage;
use crate::constants::contact::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Clone)]
pub struct ContactClient {
    endpoint: Option<String>,
    http: reqwest::Client,
}

impl ContactClient {
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { endpoint, http })
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<()> {
        let endpoint = self
            .endpoint
            .as_deref()
            .context("No contact endpoint configured")?;

        debug!(endpoint, "Posting contact message");
        self.http
            .post(endpoint)
            .json(message)
            .send()
            .await
            .with_context(|| format!("Failed to post contact message to {endpoint}"))?;
        Ok(())
    }
}

/// Background thread running submissions on its own tokio runtime
///
/// The UI hands messages in with [`SubmissionWorker::submit`] and polls
/// outcomes with [`SubmissionWorker::try_result`] once per frame.
pub struct SubmissionWorker {
    requests: async_mpsc::UnboundedSender<ContactMessage>,
    results: mpsc::Receiver<Result<(), String>>,
    _handle: thread::JoinHandle<()>,
}

impl SubmissionWorker {
    /// `notify` runs after each outcome is queued (used to wake the UI)
    pub fn spawn(client: ContactClient, notify: impl Fn() + Send + 'static) -> Result<Self> {
        let (request_tx, mut request_rx) = async_mpsc::unbounded_channel::<ContactMessage>();
        let (result_tx, result_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build contact runtime")?;

        let handle = thread::Builder::new()
            .name("contact-submit".to_string())
            .spawn(move || {
                info!("Contact submission worker started");
                runtime.block_on(async move {
                    while let Some(message) = request_rx.recv().await {
                        let outcome = client
                            .submit(&message)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        if result_tx.send(outcome).is_err() {
                            break;
                        }
                        notify();
                    }
                });
                debug!("Contact submission worker stopped");
            })
            .context("Failed to spawn contact submission thread")?;

        Ok(Self {
            requests: request_tx,
            results: result_rx,
            _handle: handle,
        })
    }

    pub fn submit(&self, message: ContactMessage) {
        if self.requests.send(message).is_err() {
            error!("Contact submission worker is gone");
        }
    }

    /// Next finished submission, if any (non-blocking)
    pub fn try_result(&self) -> Option<Result<(), String>> {
        self.results.try_recv().ok()
    }
}
