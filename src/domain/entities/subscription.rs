//! Follow relationships between users.

use chrono::{DateTime, Utc};

/// A subscriber following a channel.
///
/// `active` is set once the relationship is mutual, either because the
/// channel followed back or because the channel accepted the subscriber.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Subscription {
    pub channel_id: i64,
    pub subscriber_id: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Unordered pair of users stored in canonical `(low, high)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendPair {
    pub low: i64,
    pub high: i64,
}

impl FriendPair {
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}
