//! Scrape every page of a product listing into a JSON file.
//!
//! ```text
//! rs-product-scraper --env .environment --training training --output output.json
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing_subscriber::EnvFilter;
use url::Url;

use rs_product_scraper::encoding::transcode_to_utf8;
use rs_product_scraper::{persist_products, Error, Fetch, ScrapeConfig, Scraper};

#[derive(Parser, Debug)]
#[command(
    name = "rs-product-scraper",
    about = "Scrape a paginated product listing into normalized JSON records"
)]
struct Cli {
    /// INI-style site configuration.
    #[arg(long = "env", default_value = ".environment")]
    environment: PathBuf,

    /// Training root containing `extraction/` and `validation/`.
    #[arg(long, default_value = "training")]
    training: PathBuf,

    /// Where to write the product list.
    #[arg(long, default_value = "output.json")]
    output: PathBuf,

    /// Override `app.baseurl` from the configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Blocking HTTP fetcher that decodes pages by their declared charset.
struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rs-product-scraper/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn fetch(&self, url: &Url) -> rs_product_scraper::Result<String> {
        let fetch_error = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| fetch_error(e.to_string()))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(|e| fetch_error(e.to_string()))?;

        tracing::debug!(%url, bytes = body.len(), "fetched page");
        Ok(transcode_to_utf8(&body, content_type.as_deref()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = ScrapeConfig::from_path(&cli.environment)
        .with_context(|| format!("loading {}", cli.environment.display()))?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let scraper = Scraper::from_training_dir(config, &cli.training)
        .with_context(|| format!("training classifiers from {}", cli.training.display()))?;

    let fetcher = HttpFetch::new(Duration::from_secs(cli.timeout))?;
    let products = scraper.run(&fetcher).context("scraping listing")?;

    persist_products(&products, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    Ok(())
}
