use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::{
    mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender},
    oneshot,
};
use url::Url;

use crate::{
    domain::{url_input, Notification, ResultSet, ScrapeResult, Tab},
    error::{BackendError, ClientError, InputError},
    view::{display_multiple_results, display_single_result, show_error, ResultsPanel},
};

use super::{BackendClient, Indicator, IndicatorGuard};

/// What to do with a scrape response that arrives after a newer scrape was
/// started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Every response renders; whichever lands last wins.
    #[default]
    LastWriteWins,
    /// Only the response to the most recent scrape renders.
    DiscardStale,
}

/// Everything a view needs to draw the page at one instant.
#[derive(Debug, Clone)]
pub struct ClientSnapshot {
    pub active_tab: Tab,
    pub loading_single: bool,
    pub loading_multiple: bool,
    pub exporting: bool,
    /// `None` while the results section is hidden.
    pub panel: Option<ResultsPanel>,
    pub notifications: Vec<Notification>,
}

pub enum Command {
    SwitchTab(Tab),
    ScrapeSingle {
        input: String,
        done: oneshot::Sender<()>,
    },
    ScrapeMultiple {
        input: String,
        done: oneshot::Sender<()>,
    },
    Export {
        done: oneshot::Sender<Option<Url>>,
    },
    Snapshot {
        drain_notifications: bool,
        reply: oneshot::Sender<ClientSnapshot>,
    },
    ScrapeCompleted(ScrapeCompletion),
    ExportCompleted(ExportCompletion),
}

pub struct ScrapeCompletion {
    sequence: u64,
    outcome: ScrapeOutcome,
    done: oneshot::Sender<()>,
    loading: IndicatorGuard,
}

enum ScrapeOutcome {
    Single(Result<ScrapeResult, BackendError>),
    Multiple(Result<Vec<ScrapeResult>, BackendError>),
}

pub struct ExportCompletion {
    outcome: Result<String, BackendError>,
    done: oneshot::Sender<Option<Url>>,
    generating: IndicatorGuard,
}

#[derive(Default)]
struct ClientState {
    active_tab: Tab,
    results: ResultSet,
    panel: Option<ResultsPanel>,
    loading_single: Indicator,
    loading_multiple: Indicator,
    exporting: Indicator,
    notifications: Vec<Notification>,
    sequence: u64,
}

impl ClientState {
    fn notify(&mut self, notification: Notification) {
        log::info!("Notification: {}", notification.message);
        self.notifications.push(notification);
    }

    fn snapshot(&mut self, drain_notifications: bool) -> ClientSnapshot {
        let notifications = if drain_notifications {
            std::mem::take(&mut self.notifications)
        } else {
            self.notifications.clone()
        };

        ClientSnapshot {
            active_tab: self.active_tab,
            loading_single: self.loading_single.is_visible(),
            loading_multiple: self.loading_multiple.is_visible(),
            exporting: self.exporting.is_visible(),
            panel: self.panel.clone(),
            notifications,
        }
    }
}

/// Handle to the controller. All state lives in [`scrape_client_handler`];
/// this only carries commands to it.
#[derive(Clone)]
pub struct ScrapeClient {
    sender: UnboundedSender<Command>,
}

impl ScrapeClient {
    /// Spawns the controller task on the current tokio runtime.
    pub fn spawn(backend: BackendClient, policy: CompletionPolicy) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel::<Command>();
        let completions = sender.downgrade();
        tokio::spawn(async move {
            scrape_client_handler(receiver, completions, Arc::new(backend), policy).await
        });

        ScrapeClient { sender }
    }

    pub fn switch_tab(&self, tab: Tab) -> Result<(), ClientError> {
        self.send(Command::SwitchTab(tab))
    }

    /// Resolves once the result (or error) of this scrape has been applied.
    pub async fn scrape_single(&self, input: &str) -> Result<(), ClientError> {
        let (done, receiver) = oneshot::channel();
        self.send(Command::ScrapeSingle {
            input: input.to_string(),
            done,
        })?;
        receiver.await.map_err(|_| ClientError::Closed)
    }

    pub async fn scrape_multiple(&self, input: &str) -> Result<(), ClientError> {
        let (done, receiver) = oneshot::channel();
        self.send(Command::ScrapeMultiple {
            input: input.to_string(),
            done,
        })?;
        receiver.await.map_err(|_| ClientError::Closed)
    }

    /// Returns the download location of the generated spreadsheet, or `None`
    /// when nothing was exported (the reason is queued as a notification).
    pub async fn export_to_excel(&self) -> Result<Option<Url>, ClientError> {
        let (done, receiver) = oneshot::channel();
        self.send(Command::Export { done })?;
        receiver.await.map_err(|_| ClientError::Closed)
    }

    /// Current view state. Pending notifications are handed over and cleared.
    pub async fn render(&self) -> Result<ClientSnapshot, ClientError> {
        self.snapshot(true).await
    }

    /// Current view state, leaving pending notifications in place.
    pub async fn peek(&self) -> Result<ClientSnapshot, ClientError> {
        self.snapshot(false).await
    }

    async fn snapshot(&self, drain_notifications: bool) -> Result<ClientSnapshot, ClientError> {
        let (reply, receiver) = oneshot::channel();
        self.send(Command::Snapshot {
            drain_notifications,
            reply,
        })?;
        receiver.await.map_err(|_| ClientError::Closed)
    }

    fn send(&self, command: Command) -> Result<(), ClientError> {
        self.sender.send(command).map_err(|_| ClientError::Closed)
    }
}

pub async fn scrape_client_handler(
    mut receiver: UnboundedReceiver<Command>,
    completions: WeakUnboundedSender<Command>,
    backend: Arc<BackendClient>,
    policy: CompletionPolicy,
) {
    log::info!("Started scrape client handler with {:?}", policy);
    let mut state = ClientState::default();

    while let Some(command) = receiver.recv().await {
        match command {
            Command::SwitchTab(tab) => state.active_tab = tab,
            Command::ScrapeSingle { input, done } => match url_input::parse_single(&input) {
                Ok(url) => {
                    let loading = state.loading_single.show();
                    state.panel = None;
                    state.sequence += 1;
                    let sequence = state.sequence;
                    let backend = backend.clone();
                    dispatch(&completions, async move {
                        let outcome = ScrapeOutcome::Single(backend.scrape(&url).await);
                        Command::ScrapeCompleted(ScrapeCompletion {
                            sequence,
                            outcome,
                            done,
                            loading,
                        })
                    });
                }
                Err(e) => reject(&mut state, e, done),
            },
            Command::ScrapeMultiple { input, done } => match url_input::parse_multiple(&input) {
                Ok(urls) => {
                    let loading = state.loading_multiple.show();
                    state.panel = None;
                    state.sequence += 1;
                    let sequence = state.sequence;
                    let backend = backend.clone();
                    dispatch(&completions, async move {
                        let outcome = ScrapeOutcome::Multiple(backend.scrape_multiple(&urls).await);
                        Command::ScrapeCompleted(ScrapeCompletion {
                            sequence,
                            outcome,
                            done,
                            loading,
                        })
                    });
                }
                Err(e) => reject(&mut state, e, done),
            },
            Command::Export { done } => {
                if state.results.is_empty() {
                    state.notify(Notification::error(InputError::NothingToExport.to_string()));
                    _ = done.send(None);
                    continue;
                }

                let generating = state.exporting.show();
                let results = state.results.clone();
                let backend = backend.clone();
                dispatch(&completions, async move {
                    let outcome = backend.export_excel(&results).await;
                    Command::ExportCompleted(ExportCompletion {
                        outcome,
                        done,
                        generating,
                    })
                });
            }
            Command::Snapshot {
                drain_notifications,
                reply,
            } => {
                _ = reply.send(state.snapshot(drain_notifications));
            }
            Command::ScrapeCompleted(completion) => {
                apply_scrape(&mut state, completion, policy);
            }
            Command::ExportCompleted(completion) => {
                apply_export(&mut state, completion, &backend);
            }
        }
    }

    log::info!("Scrape client handler stopped");
}

/// Runs a request off the controller task and posts its completion back.
fn dispatch<F>(completions: &WeakUnboundedSender<Command>, request: F)
where
    F: std::future::Future<Output = Command> + Send + 'static,
{
    let Some(completions) = completions.upgrade() else {
        return;
    };
    tokio::spawn(async move {
        let completion = request.await;
        if completions.send(completion).is_err() {
            log::warn!("Scrape client handler is gone, dropping completion");
        }
    });
}

fn reject(state: &mut ClientState, error: InputError, done: oneshot::Sender<()>) {
    state.notify(Notification::error(error.to_string()));
    _ = done.send(());
}

fn apply_scrape(state: &mut ClientState, completion: ScrapeCompletion, policy: CompletionPolicy) {
    let ScrapeCompletion {
        sequence,
        outcome,
        done,
        loading,
    } = completion;

    if policy == CompletionPolicy::DiscardStale && sequence != state.sequence {
        log::info!(
            "Discarding response to scrape #{} while #{} is current",
            sequence,
            state.sequence
        );
        drop(loading);
        _ = done.send(());
        return;
    }

    match outcome {
        ScrapeOutcome::Single(Ok(result)) => {
            log::info!(
                "Scraped {} with {} emails",
                result.url,
                result.email_count()
            );
            state.panel = Some(display_single_result(&result));
            state.results = ResultSet::from(vec![result]);
        }
        ScrapeOutcome::Multiple(Ok(results)) => {
            log::info!("Scraped {} urls", results.len());
            state.panel = Some(display_multiple_results(&results));
            state.results = ResultSet::from(results);
        }
        ScrapeOutcome::Single(Err(e)) | ScrapeOutcome::Multiple(Err(e)) => {
            log::error!("Scrape #{} failed: {:?}", sequence, e);
            state.panel = Some(show_error(&e.to_string()));
        }
    }

    drop(loading);
    _ = done.send(());
}

fn apply_export(state: &mut ClientState, completion: ExportCompletion, backend: &BackendClient) {
    let ExportCompletion {
        outcome,
        done,
        generating,
    } = completion;

    let download = match outcome {
        Ok(filename) => {
            let url = backend.download_url(&filename);
            log::info!("Export ready at {}", url);
            state.notify(Notification::info(format!("Downloading {}", filename)));
            Some(url)
        }
        Err(BackendError::Rejected { message, .. }) => {
            state.notify(Notification::error(format!(
                "Error exporting: {}",
                message.as_deref().unwrap_or("Unknown error")
            )));
            None
        }
        Err(e) => {
            state.notify(Notification::error(e.to_string()));
            None
        }
    };

    drop(generating);
    _ = done.send(download);
}
