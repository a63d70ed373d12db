//! Auth endpoint DTOs

use serde::{Deserialize, Serialize};

use se_core::domain::entities::Customer;
use se_core::domain::value_objects::{VerifyAction, VerifyOutcome};

/// Response body for `POST /api/v1/auth/verify`
///
/// `accessToken` is present only when the action is `UPDATE_ACCESS_TOKEN`;
/// `customer` is present whenever the session is usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Whether the session is usable
    pub success: bool,

    /// Human-readable summary
    pub message: String,

    /// Machine-readable action for the client
    pub action: VerifyAction,

    /// Replacement access token (rotation only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Resolved customer identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl VerifyResponse {
    /// Build the wire response for a verification outcome
    pub fn from_outcome(outcome: VerifyOutcome) -> Self {
        match outcome {
            VerifyOutcome::Allow { customer } => Self {
                success: true,
                message: "Access token is valid".to_string(),
                action: VerifyAction::AllowAccess,
                access_token: None,
                customer: Some(customer),
            },
            VerifyOutcome::RotateAccess {
                access_token,
                customer,
            } => Self {
                success: true,
                message: "Access token refreshed".to_string(),
                action: VerifyAction::UpdateAccessToken,
                access_token: Some(access_token),
                customer: Some(customer),
            },
            VerifyOutcome::RedirectToLogin => Self {
                success: false,
                message: "Authentication required".to_string(),
                action: VerifyAction::RedirectToLogin,
                access_token: None,
                customer: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_response_shape() {
        let customer = Customer::new("c1", "Jo", "jo@example.com", None);
        let response = VerifyResponse::from_outcome(VerifyOutcome::Allow { customer });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["action"], "ALLOW_ACCESS");
        // No token field at all when nothing was rotated
        assert!(json.get("accessToken").is_none());
        assert_eq!(json["customer"]["id"], "c1");
    }

    #[test]
    fn test_rotation_response_carries_token() {
        let customer = Customer::new("c1", "Jo", "jo@example.com", None);
        let response = VerifyResponse::from_outcome(VerifyOutcome::RotateAccess {
            access_token: "new.jwt.token".to_string(),
            customer,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["action"], "UPDATE_ACCESS_TOKEN");
        assert_eq!(json["accessToken"], "new.jwt.token");
    }

    #[test]
    fn test_redirect_response_is_bare() {
        let response = VerifyResponse::from_outcome(VerifyOutcome::RedirectToLogin);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["action"], "REDIRECT_TO_LOGIN");
        assert!(json.get("accessToken").is_none());
        assert!(json.get("customer").is_none());
    }
}
