//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles carried in the identity token.
///
/// Only `Admin` and `User` are verified; `Pending` accounts are signed up
/// but not yet approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator.
    Admin,
    /// Regular approved user.
    User,
    /// Awaiting approval.
    Pending,
}

impl UserRole {
    /// Whether the role may use user-scoped endpoints.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Admin | Self::User)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = folderhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "pending" => Ok(Self::Pending),
            _ => Err(folderhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, user, pending"
            ))),
        }
    }
}
