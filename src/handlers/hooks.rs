//! Deploy webhook handler
//!
//! Push-to-deploy: the hosting platform POSTs here on new commits, the
//! signature is checked against the shared secret, and the configured
//! checkout is fast-forwarded. Disabled entirely unless a secret is
//! configured.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

type HmacSha256 = Hmac<Sha256>;

/// Deploy result response
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub message: String,
}

/// Verify the webhook signature and pull the configured checkout
async fn deploy(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<DeployResponse>> {
    let Some(secret) = state.config().webhook.secret.as_deref() else {
        return Err(AppError::NotFound("Webhook not configured".to_string()));
    };

    let signature = headers
        .get("X-Hub-Signature-256")
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;
    verify_signature(secret, &body, signature)?;

    let pushed_ref = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|event| event.get("ref").and_then(|r| r.as_str()).map(String::from));
    if let Some(pushed_ref) = pushed_ref.as_deref() {
        tracing::info!(push_ref = %pushed_ref, "Deploy webhook received");
    }

    let repo_path = state.config().webhook.repo_path.clone();
    let output = tokio::process::Command::new("git")
        .arg("-C")
        .arg(&repo_path)
        .arg("pull")
        .arg("--ff-only")
        .output()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("git pull failed to start: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::error!(status = ?output.status.code(), stderr = %stderr, "Deploy pull failed");
        return Err(AppError::Internal(anyhow::anyhow!("git pull failed")));
    }

    tracing::info!(path = %repo_path.display(), "Deploy pull completed");

    Ok(Json(DeployResponse {
        message: "Updated successfully".to_string(),
    }))
}

/// Constant-time HMAC-SHA256 check of an `sha256=<hex>` signature header
fn verify_signature(secret: &str, body: &[u8], header: &str) -> AppResult<()> {
    let Some(hex_digest) = header.strip_prefix("sha256=") else {
        return Err(AppError::Unauthorized);
    };
    let expected = hex::decode(hex_digest).map_err(|_| AppError::Unauthorized)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid webhook secret: {}", e)))?;
    mac.update(body);
    mac.verify_slice(&expected).map_err(|_| AppError::Unauthorized)
}

/// Webhook routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/deploy", post(deploy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn accepts_valid_signature() {
        let body = b"{\"ref\":\"refs/heads/main\"}";
        let header = sign("topsecret", body);
        assert!(verify_signature("topsecret", body, &header).is_ok());
    }

    #[test]
    fn rejects_wrong_secret() {
        let body = b"payload";
        let header = sign("other", body);
        assert!(verify_signature("topsecret", body, &header).is_err());
    }

    #[test]
    fn rejects_tampered_body() {
        let header = sign("topsecret", b"signed-body");
        assert!(verify_signature("topsecret", b"tampered-body", &header).is_err());
    }

    #[test]
    fn rejects_malformed_header() {
        assert!(verify_signature("topsecret", b"x", "md5=abcd").is_err());
        assert!(verify_signature("topsecret", b"x", "sha256=nothex").is_err());
    }
}
