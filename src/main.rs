use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use scout::{
    configuration::get_configuration,
    services::{BackendClient, ScrapeClient},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let base_url = configuration
        .backend
        .base_url()
        .context("Invalid backend base_url.")?;
    if configuration.backend.timeout().is_none() {
        log::warn!("No backend timeout configured, a stalled scrape keeps its loading indicator up");
    }
    let mut backend = BackendClient::new(base_url, configuration.backend.timeout())?;
    if let Some(public_url) = configuration
        .backend
        .public_url()
        .context("Invalid backend public_url.")?
    {
        log::info!("Sending downloads through {}", public_url);
        backend = backend.with_public_url(public_url)?;
    }
    let scrape_client = ScrapeClient::spawn(backend, configuration.backend.completion_policy);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Serving scrape client on http://{}", address);

    run(listener, scrape_client)?.await?;
    Ok(())
}
