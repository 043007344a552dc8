pub mod purchase;
pub mod session;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use crate::settings;

/// Error Response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Common GET request handler. The response body is parsed as `T` directly.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    get_with_query(endpoint, Vec::<(&str, String)>::new()).await
}

/// GET with query parameters. Values are URL-encoded by the request builder.
pub async fn get_with_query<'a, T, Q, V>(endpoint: &str, query: Q) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    Q: IntoIterator<Item = (&'a str, V)>,
    V: AsRef<str>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .query(query)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        let error_msg = describe_failure(response.status(), error_response.ok());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

fn describe_failure(status: u16, body: Option<ErrorResponse>) -> String {
    match body {
        Some(err) => format!("Error: {}", err.error),
        None => format!("HTTP error: {}", status),
    }
}
