//! Query parameters for follow and subscriber status changes.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubscriptionParams {
    pub subscribe: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: bool,
}
