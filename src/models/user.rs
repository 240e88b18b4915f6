//! User model.

use serde::{Deserialize, Serialize};

use super::UserId;

/// The owner of a set of transactions.
///
/// Only profile metadata lives here — credentials and tokens are
/// handled outside this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}
