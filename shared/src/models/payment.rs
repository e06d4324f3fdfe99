//! Payment Models

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Payment processor configuration (set-once administrative state)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentSettings {
    /// Processor secret key, never empty
    #[validate(length(min = 1, message = "secret key must not be empty"))]
    pub secret_key: String,
    /// ISO 3166-1 alpha-2 country codes allowed at checkout
    #[validate(custom(function = "validate_country_codes"))]
    #[serde(default)]
    pub allowed_countries: Vec<String>,
}

fn validate_country_codes(countries: &Vec<String>) -> Result<(), ValidationError> {
    for code in countries {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            let mut err = ValidationError::new("country_code");
            err.message = Some(format!("malformed country code: {}", code).into());
            return Err(err);
        }
    }
    Ok(())
}

/// Redacted view of the payment settings returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettingsView {
    pub configured: bool,
    #[serde(default)]
    pub allowed_countries: Vec<String>,
}

/// One line item sent to the payment processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionItem {
    pub name: String,
    /// Unit price in minor currency units
    pub price: u64,
    pub quantity: u32,
}

/// Create checkout session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub success_url: String,
    pub cancel_url: String,
}

/// Session handle returned by the payment processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Terminal status of a payment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Completed,
    Failed,
}
