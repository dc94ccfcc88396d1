//! Admin session and the gate in front of content-editing routes.
//!
//! There is a single admin session for the whole service. Logging in flips it
//! on, logging out flips it off, and a restart clears it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::{AppError, AppErrorWithRevision};

/// Decides whether a submitted password grants admin access.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, password: &str) -> bool;
}

/// Checks against a single configured password.
pub struct SharedPassword {
    expected: String,
}

impl SharedPassword {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl CredentialVerifier for SharedPassword {
    fn verify(&self, password: &str) -> bool {
        constant_time_compare(password, &self.expected)
    }
}

/// The admin flag plus the authority that may set it.
pub struct AdminSession {
    verifier: Box<dyn CredentialVerifier>,
    active: AtomicBool,
}

impl AdminSession {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
            active: AtomicBool::new(false),
        }
    }

    pub fn with_password(password: impl Into<String>) -> Self {
        Self::new(SharedPassword::new(password))
    }

    /// Turn the session on if the password checks out.
    ///
    /// A wrong password leaves the session as it was.
    pub fn login(&self, password: &str) -> bool {
        if self.verifier.verify(password) {
            self.active.store(true, Ordering::SeqCst);
            tracing::info!("admin session started");
            true
        } else {
            tracing::warn!("admin login rejected");
            false
        }
    }

    pub fn logout(&self) {
        self.active.store(false, Ordering::SeqCst);
        tracing::info!("admin session ended");
    }

    pub fn is_admin(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Admin gate layer function that takes the session as a parameter.
pub async fn admin_gate_layer(
    session: Arc<AdminSession>,
    request: Request,
    next: Next,
) -> Response {
    if session.is_admin() {
        next.run(request).await
    } else {
        tracing::warn!(path = %request.uri().path(), "admin route called without a session");
        unauthorized_response("Admin login required")
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    AppErrorWithRevision {
        error: AppError::Unauthorized(message.to_string()),
        revision_id: 0,
    }
    .into_response()
}
