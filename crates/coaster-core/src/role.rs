use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleError {
    #[error("unknown user role: {0}")]
    Unknown(String),
}

/// Dashboard audience. Selecting a role only changes which panels render;
/// there is no authentication behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Parent,
    HealthcareProvider,
    Administrator,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [
        UserRole::Parent,
        UserRole::HealthcareProvider,
        UserRole::Administrator,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::Parent => "Parent",
            UserRole::HealthcareProvider => "Healthcare Provider",
            UserRole::Administrator => "Administrator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for UserRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Parent" => Ok(UserRole::Parent),
            "Healthcare Provider" => Ok(UserRole::HealthcareProvider),
            "Administrator" => Ok(UserRole::Administrator),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}
