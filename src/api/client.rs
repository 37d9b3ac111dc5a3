use super::models::{Category, Place};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use std::{error::Error, fmt};

pub const DEFAULT_BASE_URL: &str = "http://157.230.109.162:8000";
pub const CATEGORIES_PATH: &str = "/api/categories/";
pub const PLACES_PATH: &str = "/api/items/";

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status(u16),
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {e}"),
            ApiError::Status(s) => write!(f, "Unexpected HTTP status: {s}"),
            ApiError::Parse(e) => write!(f, "Parse error: {e}"),
            ApiError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}
impl Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}
impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e)
    }
}
impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e)
    }
}

/// Where the dashboard reads its two collections from.
pub trait DashboardSource: Send + Sync + 'static {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send;
    fn places(&self) -> impl Future<Output = Result<Vec<Place>, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the category collection.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    /// Fetches the nearby places collection.
    pub async fn fetch_places(&self) -> Result<Vec<Place>, ApiError> {
        self.get_json(PLACES_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl DashboardSource for ApiClient {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send {
        self.fetch_categories()
    }

    fn places(&self) -> impl Future<Output = Result<Vec<Place>, ApiError>> + Send {
        self.fetch_places()
    }
}
