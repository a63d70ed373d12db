//! Verification outcomes produced by the session state machine.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Customer;

/// Action code surfaced to clients by the verification endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifyAction {
    /// The access token is valid; proceed with the attached identity
    AllowAccess,

    /// The access token was silently rotated; store the new token
    UpdateAccessToken,

    /// The session cannot be recovered; re-authenticate
    RedirectToLogin,
}

/// Outcome of a full verification pass (with rotation requested)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Access token valid and identity resolved
    Allow { customer: Customer },

    /// Access token expired but the refresh token was good; a fresh access
    /// token was issued (the refresh token is unchanged)
    RotateAccess {
        access_token: String,
        customer: Customer,
    },

    /// Terminal failure; the client must discard its session
    RedirectToLogin,
}

impl VerifyOutcome {
    /// The action code for this outcome
    pub fn action(&self) -> VerifyAction {
        match self {
            VerifyOutcome::Allow { .. } => VerifyAction::AllowAccess,
            VerifyOutcome::RotateAccess { .. } => VerifyAction::UpdateAccessToken,
            VerifyOutcome::RedirectToLogin => VerifyAction::RedirectToLogin,
        }
    }
}
