use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Item, ProcessFlags, Record, RecordQuery, TagUpdate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of the processing endpoint's response
#[derive(Debug, Clone, Deserialize)]
struct ProcessStatus {
    #[serde(rename = "Status", alias = "status")]
    status: String,
}

/// Error body of the API, e.g. `{"detail": "Not found."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "Status", alias = "status")]
    detail: String,
}

/// Client for the SPM REST API
#[derive(Clone)]
pub struct SpmApiService {
    client: reqwest::Client,
    api_url: String,
}

impl SpmApiService {
    /// Create a client for the API configured in `config`
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Token {}", token))
                .map_err(|e| AppError::Config(format!("Invalid api_token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let builder = reqwest::Client::builder().default_headers(headers);

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(concat!("spm/", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Fetch one page of photo records
    pub async fn get_records(&self, query: &RecordQuery) -> Result<Record, AppError> {
        let url = self.endpoint("photo_data/");
        log::debug!("Fetching records: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query.to_params())
            .send()
            .await?;

        let record: Record = decode(response).await?;
        log::info!(
            "Loaded page {}/{} ({} items)",
            record.meta.current_page(),
            record.meta.page_count(),
            record.data.results.len()
        );
        Ok(record)
    }

    /// Ask the server to scan, retag or clean up photos
    ///
    /// Returns the status message of the server.
    pub async fn process_photos(&self, flags: ProcessFlags) -> Result<String, AppError> {
        let url = self.endpoint("process_photos/");
        log::info!("Requesting photo processing: {:?}", flags);

        let response = self
            .client
            .get(&url)
            .query(&flags.to_params())
            .send()
            .await?;

        let status: ProcessStatus = decode(response).await?;
        Ok(status.status)
    }

    /// Replace the tags of an item; returns the updated item
    pub async fn update_tags(&self, update: &TagUpdate) -> Result<Item, AppError> {
        let url = self.endpoint(&format!("photo_data/{}/", update.item_id));
        log::debug!("Updating tags of item {}: {:?}", update.item_id, update.tags);

        let response = self.client.patch(&url).json(update).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| status.to_string());
        log::warn!("API returned {}: {}", status, message);
        return Err(AppError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned response and returns the raw request it received
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}/api/", addr), handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn service(api_url: String, token: Option<&str>) -> SpmApiService {
        let config = AppConfig {
            api_url,
            app_route: String::new(),
            api_token: token.map(str::to_string),
            results_per_page: 5,
        };
        SpmApiService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_records_sends_query() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"data": {"results": [{"id": 3, "file_format": ".jpg", "file_name": "sunset",
                "tags": ["sea"], "public_img_tn_url": "/media/2020"}]},
                "meta": {"page": 2, "results": 10, "total_results": 11, "total_pages": 2, "userIsAdmin": false}}"#,
        )
        .await;

        let query = RecordQuery::new(10).with_tag("sea").with_page(2);
        let record = service(url, Some("abc")).get_records(&query).await.unwrap();
        let request = server.await.unwrap();

        assert!(request
            .starts_with("GET /api/photo_data/?page=2&results=10&order_by=id&tag=sea HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: token abc"));
        assert_eq!(record.data.results[0].file_name, "sunset");
        assert_eq!(record.meta.page, 2);
    }

    #[tokio::test]
    async fn test_process_photos_returns_status() {
        let (url, server) = serve_once("202 Accepted", r#"{"Status": "Processing ..."}"#).await;

        let message = service(url, None)
            .process_photos(crate::models::ProcessAction::Scan.flags())
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(message, "Processing ...");
        assert!(request
            .starts_with("GET /api/process_photos/?scan=true&retag=false&clean_db=false HTTP/1.1"));
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_update_tags_patches_item() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"id": 9, "file_format": ".jpg", "file_name": "moon", "tags": ["a", "b"], "public_img_tn_url": "/m"}"#,
        )
        .await;

        let update = TagUpdate {
            item_id: 9,
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let item = service(url, None).update_tags(&update).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("PATCH /api/photo_data/9/ HTTP/1.1"));
        assert!(request.ends_with(r#"{"tags":["a","b"]}"#));
        assert_eq!(item.tags, update.tags);
    }

    #[tokio::test]
    async fn test_server_error_detail() {
        let (url, server) = serve_once(
            "403 Forbidden",
            r#"{"detail": "You do not have permission to perform this action."}"#,
        )
        .await;

        let err = service(url, None)
            .get_records(&RecordQuery::default())
            .await
            .unwrap_err();
        server.await.unwrap();

        match err {
            AppError::Server { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "You do not have permission to perform this action.");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let (url, server) = serve_once("200 OK", r#"{"data": 5}"#).await;

        let err = service(url, None)
            .get_records(&RecordQuery::default())
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let config = AppConfig {
            api_token: Some("bad\ntoken".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            SpmApiService::new(&config),
            Err(AppError::Config(_))
        ));
    }
}
