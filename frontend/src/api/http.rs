use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;
use crate::config::get_api_base_url;

fn url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path)).send().await?;
    decode(path, response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&url(path)).json(body)?.send().await?;
    decode(path, response).await
}

pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&url(path))
        .header("Content-Type", "application/json")
        .send()
        .await?;
    decode(path, response).await
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    // Rejections such as "No spins left" arrive as 4xx bodies with `success: false`
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<T>(&text) {
        Ok(body) => Ok(body),
        Err(_) if !(200..300).contains(&status) => {
            log::error!("{} failed with status {}", path, status);
            Err(ApiError::Status(status))
        }
        Err(e) => {
            log::error!("{} returned an unreadable body: {}", path, e);
            Err(ApiError::Decode(e.to_string()))
        }
    }
}
