//! Account-related type definitions

use serde::{Deserialize, Serialize};

/// Account type (authentication domain)
///
/// The store itself enforces no behavioral difference between the two;
/// the distinction only matters to the presentation layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Locally managed account
    #[default]
    Local,
    /// Directory-backed (LDAP) account
    Ldap,
}

/// A single display/grouping tag attached to an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Tag text
    pub text: String,
}

impl Label {
    /// Create a label from any string-like value
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A stored credential record
///
/// The serde shape of this struct is the persisted format: a JSON object
/// with `id`, `label`, `type`, `login` and a nullable `password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Account ID (UUID), assigned by the store, immutable
    pub id: String,
    /// Ordered tag list, may be empty
    pub label: Vec<Label>,
    /// Account type
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name
    pub login: String,
    /// Password; `None` means "no password set"
    pub password: Option<String>,
}

/// Create-account request: every [`Account`] field except the id,
/// which the store generates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Ordered tag list
    pub label: Vec<Label>,
    /// Account type
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name
    pub login: String,
    /// Password; `None` means "no password set"
    pub password: Option<String>,
}

impl NewAccount {
    /// Defaults for a freshly seeded record: no tags, `Local`, empty
    /// login, empty (but set) password.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            label: Vec::new(),
            kind: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
        }
    }
}

/// Partial account update.
///
/// Each `None` field is left untouched. `password` is doubly optional:
/// the outer `None` keeps the stored password, `Some(None)` explicitly
/// clears it, `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    /// New tag list, if provided
    pub label: Option<Vec<Label>>,
    /// New account type, if provided
    pub kind: Option<AccountType>,
    /// New login, if provided
    pub login: Option<String>,
    /// New password state, if provided
    pub password: Option<Option<String>>,
}
