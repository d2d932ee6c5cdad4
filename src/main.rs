use crate::config::AppConfig;
use crate::insurance::{DisabledRateLookup, HonestPolicyClient, RateLookup};
use crate::responses::json_error_response;
use crate::router::handle;
use crate::scraper::{HttpFetcher, ListingScraper};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod insurance;
mod responses;
mod router;
mod scraper;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_extractor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the outbound clients
    let fetcher = match HttpFetcher::new(config.fetch_timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("❌ Listing fetcher init failed: {e}");
            std::process::exit(1);
        }
    };

    let rates: Box<dyn RateLookup> = match &config.insurance_api_key {
        Some(key) => match HonestPolicyClient::new(
            config.insurance_base_url.as_str(),
            key.as_str(),
            config.insurance_timeout,
        ) {
            Ok(client) => Box::new(client),
            Err(e) => {
                error!("❌ Insurance client init failed: {e}");
                std::process::exit(1);
            }
        },
        None => {
            warn!("INSURANCE_API_KEY not set; monthlyInsurance will always be 0");
            Box::new(DisabledRateLookup)
        }
    };

    let scraper = ListingScraper::new(Box::new(fetcher), rates);

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &scraper) {
        Ok(resp) => resp,
        Err(err) => json_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
