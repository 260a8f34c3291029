//! Access roles.

use serde::{Deserialize, Serialize};

/// Access class of an operator.
///
/// The role only decides which panel an identity receives (staff update
/// view vs administrator reporting view); there is no finer-grained
/// permission model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    Administrator,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Staff => f.write_str("staff"),
            Role::Administrator => f.write_str("administrator"),
        }
    }
}
