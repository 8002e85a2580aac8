//! HTTP client for the hosted PostgREST store.

use super::types::{parse_created_at, LatestHero, RawHeroRecord, TraitRow};
use super::HeroStore;
use crate::utils::config::{
    DEFAULT_REQUEST_TIMEOUT, HEROES_TABLE, REST_PATH, SINGLE_OBJECT_MEDIA_TYPE, TRAITS_TABLE,
};
use crate::utils::error::StoreError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

/// Store client querying tables anonymously over HTTP
#[derive(Debug)]
pub struct HttpStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpStore {
    /// Create a new store client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(StoreError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// GET request against a table with the anonymous key attached
    fn get(&self, table: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = table_url(&self.base_url, table);
        debug!("Store request: GET {} {:?}", url, query);

        self.client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(query)
    }
}

impl HeroStore for HttpStore {
    fn fetch_traits(&self) -> Result<Vec<TraitRow>, StoreError> {
        info!("Fetching trait table");

        let response = self
            .get(
                TRAITS_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("order", "category.asc,value.asc".to_string()),
                ],
            )
            .send()?;

        let rows: Vec<TraitRow> = check_status(response)?.json()?;
        debug!("Received {} trait rows", rows.len());

        Ok(rows)
    }

    fn fetch_latest_created_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let response = self
            .get(
                HEROES_TABLE,
                &[
                    ("select", "created_at".to_string()),
                    ("order", "created_at.desc".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .send()?;

        let latest: Vec<LatestHero> = check_status(response)?.json()?;

        latest
            .first()
            .map(|hero| parse_created_at(&hero.created_at))
            .transpose()
    }

    fn fetch_hero(&self, id: u64) -> Result<Option<RawHeroRecord>, StoreError> {
        info!("Fetching hero #{}", id);

        let response = self
            .get(
                HEROES_TABLE,
                &[("select", "*".to_string()), ("id", format!("eq.{}", id))],
            )
            .header(ACCEPT, SINGLE_OBJECT_MEDIA_TYPE)
            .send()?;

        // Single-object requests answer "no rows" with 406
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            debug!("Store reported no row for hero #{}", id);
            return Ok(None);
        }

        let body: serde_json::Value = check_status(response)?.json()?;
        decode_single_row(body)
    }
}

/// Build the REST endpoint for a table
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), REST_PATH, table)
}

/// Turn a non-success HTTP status into an error
fn check_status(response: Response) -> Result<Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    Err(StoreError::InvalidResponse(format!(
        "HTTP {}: {}",
        response.status(),
        response.text().unwrap_or_default()
    )))
}

/// Decode a single-row body, tolerating `null` and array-wrapped rows
pub fn decode_single_row(body: serde_json::Value) -> Result<Option<RawHeroRecord>, StoreError> {
    let row = match body {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Array(mut rows) => {
            if rows.is_empty() {
                return Ok(None);
            }
            rows.swap_remove(0)
        }
        other => other,
    };

    Ok(Some(serde_json::from_value(row)?))
}
