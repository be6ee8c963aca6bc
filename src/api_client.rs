pub mod importance;
pub mod prediction;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// The service reports application errors as an `{ "error": "..." }` body,
/// sometimes alongside a non-2xx status. Payload and failure bodies are
/// told apart by shape, not by status code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServiceReply<T> {
    Failure { error: String },
    Payload(T),
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    let status = response.status();
    log::trace!("GET {} - Response received, parsing JSON", endpoint);

    let reply: ServiceReply<T> = match response.json().await {
        Ok(reply) => reply,
        Err(e) => {
            let error_msg = if status >= 400 {
                format!("HTTP error: {}", status)
            } else {
                format!("Failed to parse response: {}", e)
            };
            log::error!("GET {} - {}", endpoint, error_msg);
            return Err(error_msg);
        }
    };

    match reply {
        ServiceReply::Failure { error } => {
            log::error!("GET {} - Service error: {}", endpoint, error);
            Err(error)
        }
        ServiceReply::Payload(data) => {
            log::info!("GET {} - Success", endpoint);
            Ok(data)
        }
    }
}
