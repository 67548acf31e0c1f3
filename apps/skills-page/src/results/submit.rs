//! Email preparation client: posts the selected rows and opens the returned link.
//!
//! One attempt per click. There is no retry and no in-flight guard, so two quick
//! clicks send two requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::results::selection::SelectedRecord;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response has no usable url")]
    MissingUrl,

    #[error("Failed to open {url}: {message}")]
    Open { url: String, message: String },
}

/// Success body of the email preparation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrepEmailResponse {
    pub url: Option<String>,
}

/// Transport for the email preparation request.
#[async_trait]
pub trait PrepEmailTransport: Send + Sync {
    async fn prep_email(&self, records: &[SelectedRecord]) -> Result<PrepEmailResponse, SubmitError>;
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open_new_context(&self, url: &str) -> Result<(), SubmitError>;
}

/// reqwest-backed transport posting JSON to the page's origin.
#[derive(Clone)]
pub struct HttpPrepEmail {
    client: Client,
    endpoint: String,
}

impl HttpPrepEmail {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SubmitError> {
        Self::new(config.prep_email_url(), config.http_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PrepEmailTransport for HttpPrepEmail {
    async fn prep_email(&self, records: &[SelectedRecord]) -> Result<PrepEmailResponse, SubmitError> {
        debug!("POST {} with {} records", self.endpoint, records.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(records)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Opens links with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open_new_context(&self, url: &str) -> Result<(), SubmitError> {
        open::that(url).map_err(|err| SubmitError::Open {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

/// Posts `records`, then opens the returned URL. Returns the opened URL.
pub async fn submit_selection(
    transport: &dyn PrepEmailTransport,
    opener: &dyn LinkOpener,
    records: &[SelectedRecord],
) -> Result<String, SubmitError> {
    let response = transport.prep_email(records).await?;
    let url = response
        .url
        .filter(|url| !url.is_empty())
        .ok_or(SubmitError::MissingUrl)?;
    opener.open_new_context(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_new_context(&self, url: &str) -> Result<(), SubmitError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/prep_email")
    }

    fn records() -> Vec<SelectedRecord> {
        vec![
            SelectedRecord {
                name: "Petr Svoboda".to_string(),
                email: "petr@example.cz".to_string(),
            },
            SelectedRecord {
                name: "Tomáš Černý".to_string(),
                email: "tomas@example.cz".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_posts_json_and_opens_returned_url() {
        let router = Router::new().route(
            "/prep_email",
            post(|Json(body): Json<Value>| async move {
                let bcc: Vec<&str> = body
                    .as_array()
                    .map(|rows| rows.iter().filter_map(|r| r["Email"].as_str()).collect())
                    .unwrap_or_default();
                Json(json!({ "url": format!("https://mail.example.com/?bcc={}", bcc.join(",")) }))
            }),
        );
        let endpoint = serve(router).await;
        let transport = HttpPrepEmail::new(endpoint, Duration::from_secs(5)).unwrap();
        let opener = RecordingOpener::default();

        let url = submit_selection(&transport, &opener, &records()).await.unwrap();

        assert_eq!(
            url,
            "https://mail.example.com/?bcc=petr@example.cz,tomas@example.cz"
        );
        assert_eq!(*opener.opened.lock().unwrap(), vec![url]);
    }

    #[tokio::test]
    async fn test_server_error_is_reported_without_opening() {
        let router = Router::new().route(
            "/prep_email",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = serve(router).await;
        let transport = HttpPrepEmail::new(endpoint, Duration::from_secs(5)).unwrap();
        let opener = RecordingOpener::default();

        let err = submit_selection(&transport, &opener, &records())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Status { status: 500, .. }));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_response_without_url() {
        let router = Router::new().route("/prep_email", post(|| async { Json(json!({})) }));
        let endpoint = serve(router).await;
        let transport = HttpPrepEmail::new(endpoint, Duration::from_secs(5)).unwrap();
        let opener = RecordingOpener::default();

        let err = submit_selection(&transport, &opener, &[]).await.unwrap_err();
        assert!(matches!(err, SubmitError::MissingUrl));
    }

    #[tokio::test]
    async fn test_success_with_non_json_body() {
        let router = Router::new().route(
            "/prep_email",
            post(|| async { "<html>Gmail</html>" }),
        );
        let endpoint = serve(router).await;
        let transport = HttpPrepEmail::new(endpoint, Duration::from_secs(5)).unwrap();
        let opener = RecordingOpener::default();

        let err = submit_selection(&transport, &opener, &records())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Http(ref e) if e.is_decode()));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_endpoint_from_config() {
        let config = Config::from_lookup(|key| match key {
            "SKILLS_CATALOG" => Some("skills.json".to_string()),
            "APP_BASE_URL" => Some("http://localhost:8000".to_string()),
            _ => None,
        })
        .unwrap();
        let transport = HttpPrepEmail::from_config(&config).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:8000/prep_email");
    }
}
