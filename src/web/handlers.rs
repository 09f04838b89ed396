use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};
use log::{error, info};

use crate::error::{AppError, InvalidRequest};
use crate::model::prompt::render_prompt;
use crate::web::models::{InsuranceResponse, Turn};
use crate::web::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn is_json(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Checks that a JSON body carries a `history` array of speaker/text pairs.
/// Bodies sent with a non-JSON content type are treated as empty.
pub fn validate_history(content_type: &str, body: &[u8]) -> Result<Vec<Turn>, InvalidRequest> {
    if !is_json(content_type) {
        return Err(InvalidRequest::MissingHistory);
    }

    let parsed: Value =
        serde_json::from_slice(body).map_err(|_| InvalidRequest::MissingHistory)?;

    let entries = match parsed.get("history") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(InvalidRequest::MissingHistory),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Turn::deserialize(entry).map_err(|e| InvalidRequest::MalformedTurn {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

// Insurance advisor endpoint
pub async fn insurance(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let history = validate_history(req.content_type(), &body).map_err(|e| {
        info!("Rejected request: {}", e);
        e
    })?;

    let prompt = render_prompt(&history);
    info!("Relaying transcript of {} turns", history.len());

    match data.model.respond(&prompt).await {
        Ok(reply) => Ok(HttpResponse::Ok().json(InsuranceResponse::new(reply))),
        Err(e) => {
            error!("Gemini error: {}", e);
            Err(e.into())
        }
    }
}
