use crate::api::error::ApiError;
use crate::api::models::*;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const LIBRARY_PATH: &str = "/library_json";
const STATUS_PATH: &str = "/status";
const UPLOAD_PATH: &str = "/upload";

/// The remote playback service as seen by the controllers.
///
/// Every call suspends until the server answers or the request fails; nothing
/// here retries or times out.
#[allow(async_fn_in_trait)]
pub trait MediaBackend {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, ApiError>;

    async fn fetch_status(&self) -> Result<String, ApiError>;

    /// Sends a transport command and returns the server's status line.
    async fn dispatch(&self, command: &TransportCommand) -> Result<String, ApiError>;

    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaServerClient {
    base_url: String,
    accept_legacy_catalog: bool,
}

impl MediaServerClient {
    pub fn new(base_url: &str, accept_legacy_catalog: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            accept_legacy_catalog,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = HTTP_CLIENT
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| ApiError::transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ApiError::transport(path, e))
    }
}

impl MediaBackend for MediaServerClient {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, ApiError> {
        let body = self.get_text(LIBRARY_PATH).await?;
        let parsed = CatalogResponse::from_json(&body, self.accept_legacy_catalog)
            .map_err(|e| ApiError::malformed(LIBRARY_PATH, e))?;

        if parsed.shape == CatalogShape::Legacy {
            warn!(
                path = LIBRARY_PATH,
                "server sent a bare track array; expected the {{empty, songs}} envelope"
            );
        }
        debug!(tracks = parsed.catalog.track_count(), "catalog fetched");
        Ok(parsed)
    }

    async fn fetch_status(&self) -> Result<String, ApiError> {
        self.get_text(STATUS_PATH).await
    }

    async fn dispatch(&self, command: &TransportCommand) -> Result<String, ApiError> {
        let path = command.path();
        debug!(%path, "dispatching transport command");
        self.get_text(&path).await
    }

    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = HTTP_CLIENT
            .post(self.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::transport(UPLOAD_PATH, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(UPLOAD_PATH, e))?;

        // Servers answer refusals with a JSON body and a 4xx; keep the message.
        match serde_json::from_str::<UploadReceipt>(&body) {
            Ok(receipt) => Ok(receipt),
            Err(_) if !status.is_success() => Err(ApiError::Status {
                path: UPLOAD_PATH.to_string(),
                status: status.as_u16(),
            }),
            Err(e) => Err(ApiError::malformed(UPLOAD_PATH, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = MediaServerClient::new("http://pi.local:5000/", true);
        assert_eq!(client.endpoint(STATUS_PATH), "http://pi.local:5000/status");
    }
}
