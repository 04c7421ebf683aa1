use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time aggregate over the users in a registry.
///
/// Built by [`UserService::statistics`](crate::service::UserService::statistics);
/// never updated after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub total_users: usize,
    pub active_users: usize,
    pub frequent_users: usize,
    pub total_logins: u64,
}

impl UserStatistics {
    pub fn new(
        total_users: usize,
        active_users: usize,
        frequent_users: usize,
        total_logins: u64,
    ) -> Self {
        Self {
            total_users,
            active_users,
            frequent_users,
            total_logins,
        }
    }

    /// Share of users that are active, or `0.0` for an empty registry.
    pub fn active_user_ratio(&self) -> f64 {
        if self.total_users == 0 {
            return 0.0;
        }
        self.active_users as f64 / self.total_users as f64
    }

    /// Mean login count per user, or `0.0` for an empty registry.
    pub fn average_logins_per_user(&self) -> f64 {
        if self.total_users == 0 {
            return 0.0;
        }
        self.total_logins as f64 / self.total_users as f64
    }
}

impl fmt::Display for UserStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserStatistics(total_users={}, active_users={}, frequent_users={}, \
             total_logins={}, active_ratio={:.2})",
            self.total_users,
            self.active_users,
            self.frequent_users,
            self.total_logins,
            self.active_user_ratio()
        )
    }
}
