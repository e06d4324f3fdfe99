//! Admin Registry Model

use serde::{Deserialize, Serialize};

/// Grant/revoke admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminGrant {
    /// Principal id as carried in the caller's token subject
    pub principal: String,
}
