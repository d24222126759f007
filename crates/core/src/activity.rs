use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActivityId, UserId};

/// One entry of a user's recent activity feed.
///
/// `user_id` is a soft reference: nothing checks that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: ActivityId,
    pub user_id: UserId,
    pub action: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub icon: String,
}

