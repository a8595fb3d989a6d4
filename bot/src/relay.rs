use serde::Deserialize;

/// Sent when the external API answers but the JSON has no `response` field.
pub const MISSING_RESPONSE: &str = "Sorry, I couldn't find a response.";
/// Sent when the external API is unreachable or answers with a non-2xx status.
pub const SERVICE_DOWN: &str = "Sorry, the external service is down.";
/// Sent when the external API answers 2xx with a body that is not JSON.
pub const INTERNAL_ERROR: &str = "An internal error occurred.";

/// The query parameter name is fixed by the external API.
const QUERY_PARAM: &str = "wife";

#[derive(Deserialize, Debug)]
struct ApiReply {
    response: Option<String>,
}

#[derive(Debug)]
enum FetchError {
    Http(reqwest::Error),
    Body(serde_json::Error),
}

/// Client for the external text-response API.
#[derive(Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_owned(),
        }
    }

    /// Forwards the user's text and always yields something to send back,
    /// falling back to a canned string per failure class.
    pub async fn reply_text(&self, text: &str) -> String {
        match self.fetch(text).await {
            Ok(ApiReply {
                response: Some(reply),
            }) => reply,
            Ok(ApiReply { response: None }) => MISSING_RESPONSE.to_owned(),
            Err(FetchError::Http(e)) => {
                tracing::warn!("External API request failed: {e}");
                SERVICE_DOWN.to_owned()
            }
            Err(FetchError::Body(e)) => {
                tracing::error!("External API returned an unparseable body: {e}");
                INTERNAL_ERROR.to_owned()
            }
        }
    }

    async fn fetch(&self, text: &str) -> Result<ApiReply, FetchError> {
        let body = self
            .client
            .get(&self.url)
            .query(&[(QUERY_PARAM, text)])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(FetchError::Http)?
            .text()
            .await
            .map_err(FetchError::Http)?;
        serde_json::from_str(&body).map_err(FetchError::Body)
    }
}
