use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    domain::{ResultSet, ScrapeResult},
    error::BackendError,
};

/// HTTP client for the scraping backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    /// Base the browser reaches the backend on; `base_url` unless overridden.
    download_base: Url,
}

#[derive(Serialize)]
struct ScrapeBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct ScrapeMultipleBody<'a> {
    urls: &'a [String],
}

#[derive(Serialize)]
struct ExportBody<'a> {
    results: &'a ResultSet,
}

#[derive(Deserialize)]
struct ScrapeMultipleResponse {
    results: Vec<ScrapeResult>,
}

#[derive(Deserialize)]
struct ExportResponse {
    filename: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendClientBuildError {
    #[error("backend url {0} cannot carry a path")]
    NotABase(Url),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

impl BackendClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, BackendClientBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(BackendClientBuildError::NotABase(base_url));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(BackendClient {
            client: builder.build()?,
            download_base: base_url.clone(),
            base_url,
        })
    }

    /// Sends download links through `public_url` instead of the base url the
    /// server itself talks to.
    pub fn with_public_url(mut self, public_url: Url) -> Result<Self, BackendClientBuildError> {
        if public_url.cannot_be_a_base() {
            return Err(BackendClientBuildError::NotABase(public_url));
        }
        self.download_base = public_url;
        Ok(self)
    }

    pub async fn scrape(&self, url: &str) -> Result<ScrapeResult, BackendError> {
        let mut result: ScrapeResult = self.post(&["api", "scrape"], &ScrapeBody { url }).await?;
        if result.url.is_empty() {
            result.url = url.to_string();
        }
        Ok(result)
    }

    pub async fn scrape_multiple(&self, urls: &[String]) -> Result<Vec<ScrapeResult>, BackendError> {
        let response: ScrapeMultipleResponse = self
            .post(&["api", "scrape-multiple"], &ScrapeMultipleBody { urls })
            .await?;
        Ok(response.results)
    }

    /// Asks the backend to build a spreadsheet and returns the file name it
    /// can later be downloaded under.
    pub async fn export_excel(&self, results: &ResultSet) -> Result<String, BackendError> {
        let response: ExportResponse = self
            .post(&["api", "export-excel"], &ExportBody { results })
            .await?;
        Ok(response.filename)
    }

    /// Where the browser is sent to fetch an exported file. The file name may
    /// contain `/` separated directories; each piece is percent-encoded on
    /// its own so the name cannot smuggle a query or fragment.
    pub fn download_url(&self, filename: &str) -> Url {
        let mut segments = vec!["api", "download"];
        segments.extend(filename.split('/').filter(|s| !s.is_empty()));
        extend(&self.download_base, &segments)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        extend(&self.base_url, segments)
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        log::info!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await?;
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .ok()
                .and_then(|body| body.error);
            log::warn!("Backend answered {} with error {:?}", status, message);
            return Err(BackendError::Rejected { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}

fn extend(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Checked when the client is built.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
