use crate::models::responses::SummaryResponse;
use crate::services::summarize::{summarize_text, MAX_SUMMARY_SENTENCES};
use crate::utils::text::extract_image_urls;
use axum::{http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

pub fn summarize_router() -> Router {
    Router::new().route("/summarize_pages", post(summarize_pages))
}

pub async fn summarize_pages(
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    info!("Summarizing {} characters of page text", text.len());

    let resp = summarize_text(text, MAX_SUMMARY_SENTENCES);
    let images = extract_image_urls(text);

    Ok(Json(SummaryResponse {
        resp,
        images,
        error: None,
    }))
}
