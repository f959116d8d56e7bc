use serde::{Deserialize, Serialize};

use crate::models::RoleSet;

/// Which upstream booking query a session is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingScope {
    /// Every booking in the system.
    All,
    /// Only bookings attributed to the signed-in account.
    Mine,
}

impl BookingScope {
    pub fn for_roles(roles: &RoleSet) -> Self {
        if roles.is_privileged() {
            BookingScope::All
        } else {
            BookingScope::Mine
        }
    }
}
