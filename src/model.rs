//! User records as served by the backend.
//!
//! The backend mixes naming styles (`first_name` next to `lastName`, `UserType`)
//! and the single-user endpoint calls the company list `company_names`. Field
//! names are normalized here while deserialization keeps accepting the keys the
//! backend actually sends.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Mask rendered in place of the password hash on every display surface.
pub const PASSWORD_MASK: &str = "********";

/// A user account. Created and owned by the backend; the client only reads it
/// and requests changes to [`User::disable`].
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub uid: String,
    #[serde(rename = "UserType", alias = "user_type", alias = "userType", default)]
    pub user_type: UserType,
    /// Creation time as a unix timestamp.
    #[serde(default)]
    pub tstamp: i64,
    /// Last activity, in whatever textual form the backend produced.
    #[serde(default)]
    pub ts_lastentry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub password: Option<SecretString>,
    pub disable: DisableFlag,
    #[serde(alias = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", alias = "last_name", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(alias = "company_names", default)]
    pub companies: Vec<String>,
}

impl User {
    /// Companies joined the way tables and detail lists render them.
    #[must_use]
    pub fn companies_display(&self) -> String {
        self.companies.join(", ")
    }

    /// Password cell content. Never the stored value.
    #[must_use]
    pub fn password_display(&self) -> &'static str {
        if self.password.is_some() {
            PASSWORD_MASK
        } else {
            ""
        }
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

/// The 0/1 `disable` column. Any other value is rejected when decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum DisableFlag {
    #[default]
    Enabled,
    Disabled,
}

impl DisableFlag {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Enabled => 0,
            Self::Disabled => 1,
        }
    }

    /// Label of the button that flips this flag.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Enabled => "Disable",
            Self::Disabled => "Enable",
        }
    }
}

impl TryFrom<i64> for DisableFlag {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Enabled),
            1 => Ok(Self::Disabled),
            other => Err(format!("disable must be 0 or 1, got {other}")),
        }
    }
}

impl From<DisableFlag> for u8 {
    fn from(flag: DisableFlag) -> Self {
        flag.as_u8()
    }
}

impl fmt::Display for DisableFlag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(formatter, "enabled"),
            Self::Disabled => write!(formatter, "disabled"),
        }
    }
}

/// Account category stored in the backend's `UserType` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum UserType {
    Institute,
    Admin,
    User,
    Other(i64),
}

impl Default for UserType {
    // The backend creates admins unless told otherwise.
    fn default() -> Self {
        Self::Admin
    }
}

impl From<i64> for UserType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Institute,
            2 => Self::Admin,
            3 => Self::User,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Institute => write!(formatter, "institute"),
            Self::Admin => write!(formatter, "admin"),
            Self::User => write!(formatter, "user"),
            Self::Other(value) => write!(formatter, "type {value}"),
        }
    }
}
