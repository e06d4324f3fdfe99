//! Payment Processor Client
//!
//! Thin client over the external processor's session API. The trait keeps
//! the handlers testable without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{CheckoutSession, SessionItem, SessionStatus};
use shared::{AppError, AppResult, ErrorCode};
use std::time::Duration;

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Open a checkout session for the given line items.
    async fn create_session(
        &self,
        secret_key: &str,
        items: &[SessionItem],
        success_url: &str,
        cancel_url: &str,
    ) -> AppResult<CheckoutSession>;

    /// Look up the terminal status of a session.
    async fn session_status(&self, secret_key: &str, session_id: &str)
    -> AppResult<SessionStatus>;
}

/// Wire payload for session creation.
#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    items: &'a [SessionItem],
    success_url: &'a str,
    cancel_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: SessionStatus,
}

/// HTTP client against the processor's REST API, authenticated with the
/// configured secret key as a bearer token.
pub struct HttpPaymentProcessor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPaymentProcessor {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }
}

#[async_trait]
impl PaymentProcessor for HttpPaymentProcessor {
    async fn create_session(
        &self,
        secret_key: &str,
        items: &[SessionItem],
        success_url: &str,
        cancel_url: &str,
    ) -> AppResult<CheckoutSession> {
        let payload = CreateSessionRequest {
            items,
            success_url,
            cancel_url,
        };

        let resp = self
            .client
            .post(format!("{}/v1/sessions", self.base_url))
            .bearer_auth(secret_key)
            .json(&payload)
            .send()
            .await
            .map_err(network_error)?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "Payment session creation rejected");
            return Err(AppError::new(ErrorCode::PaymentSessionFailed)
                .with_detail("status", resp.status().as_u16()));
        }

        let session: SessionResponse = resp.json().await.map_err(network_error)?;
        tracing::info!(session_id = %session.id, "Payment session created");
        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }

    async fn session_status(
        &self,
        secret_key: &str,
        session_id: &str,
    ) -> AppResult<SessionStatus> {
        let resp = self
            .client
            .get(format!("{}/v1/sessions/{}", self.base_url, session_id))
            .bearer_auth(secret_key)
            .send()
            .await
            .map_err(network_error)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::new(ErrorCode::PaymentSessionNotFound)
                .with_detail("session_id", session_id.to_string()));
        }
        if !resp.status().is_success() {
            return Err(AppError::new(ErrorCode::PaymentSessionFailed)
                .with_detail("status", resp.status().as_u16()));
        }

        let status: StatusResponse = resp.json().await.map_err(network_error)?;
        Ok(status.status)
    }
}

fn network_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::with_message(ErrorCode::TimeoutError, format!("Payment request timed out: {}", e))
    } else {
        AppError::with_message(ErrorCode::NetworkError, format!("Payment request failed: {}", e))
    }
}

pub mod testing {
    use super::*;
    use parking_lot::Mutex;

    /// In-memory processor used by the API tests.
    #[derive(Default)]
    pub struct MockPaymentProcessor {
        sessions: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PaymentProcessor for MockPaymentProcessor {
        async fn create_session(
            &self,
            _secret_key: &str,
            items: &[SessionItem],
            _success_url: &str,
            _cancel_url: &str,
        ) -> AppResult<CheckoutSession> {
            if items.is_empty() {
                return Err(AppError::new(ErrorCode::PaymentSessionFailed));
            }
            let mut sessions = self.sessions.lock();
            let id = format!("sess_{}", sessions.len());
            sessions.push(id.clone());
            Ok(CheckoutSession {
                url: format!("https://pay.example/{}", id),
                id,
            })
        }

        async fn session_status(
            &self,
            _secret_key: &str,
            session_id: &str,
        ) -> AppResult<SessionStatus> {
            if self.sessions.lock().iter().any(|s| s == session_id) {
                Ok(SessionStatus::Completed)
            } else {
                Err(AppError::new(ErrorCode::PaymentSessionNotFound)
                    .with_detail("session_id", session_id.to_string()))
            }
        }
    }
}
