// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::SheetConfig;
use crate::record::{records_from_table, Record};

pub mod envelope;

#[cfg(test)]
pub(crate) mod fixtures;

pub use envelope::parse_remote_table;

/// Pulls the company directory from its gviz endpoint.
#[derive(Debug, Clone)]
pub struct SheetLoader {
    client: Client,
    url: Url,
}

impl SheetLoader {
    pub fn new(client: Client, config: &SheetConfig) -> Result<Self> {
        let url = config.query_url()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn get_text(&self) -> Result<String> {
        debug!("Fetching text from {}", self.url);
        self.client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", self.url))?
            .text()
            .await
            .with_context(|| format!("Reading text from {}", self.url))
    }

    /// One GET, one parse. No retry.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let body = self.get_text().await?;
        debug!(bytes = body.len(), "received sheet body");
        let table = parse_remote_table(&body)
            .with_context(|| format!("parsing sheet response from {}", self.url))?;
        let records = records_from_table(&table);
        info!(
            columns = table.cols.len(),
            records = records.len(),
            "loaded sheet"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fields;

    #[tokio::test]
    async fn fetches_and_normalizes_rows() {
        let addr = fixtures::serve(200, fixtures::two_company_body());
        let loader = SheetLoader::new(Client::new(), &fixtures::config_for(addr)).unwrap();

        let records = loader.fetch_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].text(fields::COMPANY_NAME).as_deref(),
            Some("Riot Games")
        );
        assert_eq!(records[1].text(fields::EXCHANGE).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let addr = fixtures::serve(500, fixtures::two_company_body());
        let loader = SheetLoader::new(Client::new(), &fixtures::config_for(addr)).unwrap();
        assert!(loader.fetch_records().await.is_err());
    }

    #[tokio::test]
    async fn unwrapped_body_is_an_error() {
        let addr = fixtures::serve(200, fixtures::TWO_COMPANY_JSON.to_string());
        let loader = SheetLoader::new(Client::new(), &fixtures::config_for(addr)).unwrap();
        let err = loader.fetch_records().await.unwrap_err();
        assert!(format!("{:#}", err).contains("prefix"));
    }

    #[test]
    fn url_is_built_once_from_config() {
        let cfg = SheetConfig {
            base_url: "http://localhost:1/d".to_string(),
            sheet_id: "s".to_string(),
            tab_id: "3".to_string(),
        };
        let loader = SheetLoader::new(Client::new(), &cfg).unwrap();
        assert_eq!(
            loader.url().as_str(),
            "http://localhost:1/d/s/gviz/tq?tqx=out:json&gid=3"
        );
    }
}
