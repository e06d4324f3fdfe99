//! Payment Settings Store
//!
//! Administrative payment configuration. Validation failures map to the
//! payment error codes rather than the generic validation code, so the
//! client can tell a missing key from a malformed country list.

use parking_lot::RwLock;
use shared::models::{PaymentSettings, PaymentSettingsView};
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;

#[derive(Debug, Default)]
pub struct PaymentConfigStore {
    settings: RwLock<Option<PaymentSettings>>,
}

impl PaymentConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&self, settings: PaymentSettings) -> AppResult<PaymentSettingsView> {
        if settings.secret_key.is_empty() {
            return Err(AppError::new(ErrorCode::SecretKeyRequired));
        }
        if let Err(errors) = settings.validate() {
            if errors.field_errors().contains_key("allowed_countries") {
                return Err(AppError::new(ErrorCode::InvalidCountryCode)
                    .with_detail("countries", settings.allowed_countries.join(",")));
            }
            return Err(AppError::validation(errors.to_string()));
        }

        let view = view_of(&settings);
        *self.settings.write() = Some(settings);
        tracing::info!("Payment settings configured");
        Ok(view)
    }

    /// Redacted view for clients; the secret key never leaves the store.
    pub fn view(&self) -> PaymentSettingsView {
        match &*self.settings.read() {
            Some(settings) => view_of(settings),
            None => PaymentSettingsView {
                configured: false,
                allowed_countries: Vec::new(),
            },
        }
    }

    pub fn secret_key(&self) -> AppResult<String> {
        self.settings
            .read()
            .as_ref()
            .map(|s| s.secret_key.clone())
            .ok_or_else(|| AppError::new(ErrorCode::PaymentNotConfigured))
    }

    pub fn is_configured(&self) -> bool {
        self.settings.read().is_some()
    }
}

fn view_of(settings: &PaymentSettings) -> PaymentSettingsView {
    PaymentSettingsView {
        configured: true,
        allowed_countries: settings.allowed_countries.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_and_view() {
        let store = PaymentConfigStore::new();
        assert!(!store.view().configured);
        assert_eq!(
            store.secret_key().unwrap_err().code,
            ErrorCode::PaymentNotConfigured
        );

        store
            .configure(PaymentSettings {
                secret_key: "sk_test_123".to_string(),
                allowed_countries: vec!["ES".to_string()],
            })
            .unwrap();

        let view = store.view();
        assert!(view.configured);
        assert_eq!(view.allowed_countries, vec!["ES"]);
        assert_eq!(store.secret_key().unwrap(), "sk_test_123");
    }

    #[test]
    fn test_configure_empty_key() {
        let store = PaymentConfigStore::new();
        let err = store
            .configure(PaymentSettings {
                secret_key: String::new(),
                allowed_countries: vec![],
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SecretKeyRequired);
        assert!(!store.is_configured());
    }

    #[test]
    fn test_configure_bad_country() {
        let store = PaymentConfigStore::new();
        let err = store
            .configure(PaymentSettings {
                secret_key: "sk_test_123".to_string(),
                allowed_countries: vec!["esp".to_string()],
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCountryCode);
    }

    #[test]
    fn test_reconfigure_replaces() {
        let store = PaymentConfigStore::new();
        for key in ["sk_one", "sk_two"] {
            store
                .configure(PaymentSettings {
                    secret_key: key.to_string(),
                    allowed_countries: vec![],
                })
                .unwrap();
        }
        assert_eq!(store.secret_key().unwrap(), "sk_two");
    }
}
