//! Editable draft state for one account, kept separate from the stored
//! record so a half-typed form never leaks into the collection.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Account, AccountType, AccountUpdate, Label};

/// Maximum length of the raw label input, in characters
pub const LABEL_MAX_LENGTH: usize = 50;
/// Maximum login length, in characters
pub const LOGIN_MAX_LENGTH: usize = 100;
/// Maximum password length, in characters
pub const PASSWORD_MAX_LENGTH: usize = 100;

/// Separator between tags in the raw label input
const LABEL_SEPARATOR: char = ';';

/// Editable mirror of one account.
///
/// `label_input` holds the tags as a single semicolon-separated string;
/// `password` is a plain string and is ignored for LDAP drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    /// ID of the account being edited
    pub id: String,
    /// Semicolon-separated tag text
    pub label_input: String,
    /// Account type
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name
    pub login: String,
    /// Password input (only meaningful for `Local`)
    pub password: String,
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftErrors {
    /// Label input error
    pub label: Option<String>,
    /// Account type error
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Login error
    pub login: Option<String>,
    /// Password error
    pub password: Option<String>,
}

impl DraftErrors {
    /// `true` when every field validated cleanly
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.kind.is_none()
            && self.login.is_none()
            && self.password.is_none()
    }
}

impl AccountDraft {
    /// Build a draft from a stored account, joining its tags with `"; "`.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        let label_input = account
            .label
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            id: account.id.clone(),
            label_input,
            kind: account.kind,
            login: account.login.clone(),
            password: account.password.clone().unwrap_or_default(),
        }
    }

    /// Split the raw label input into tags: separator `;`, surrounding
    /// whitespace trimmed, empty segments dropped.
    #[must_use]
    pub fn parse_labels(&self) -> Vec<Label> {
        self.label_input
            .split(LABEL_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Label::new)
            .collect()
    }

    /// Validate the draft against the field constraints.
    #[must_use]
    pub fn validate(&self) -> DraftErrors {
        let mut errors = DraftErrors::default();

        if self.label_input.chars().count() > LABEL_MAX_LENGTH {
            errors.label = Some(format!("Labels must be at most {LABEL_MAX_LENGTH} characters"));
        }

        if self.login.trim().is_empty() {
            errors.login = Some("Login is required".to_string());
        } else if self.login.chars().count() > LOGIN_MAX_LENGTH {
            errors.login = Some(format!("Login must be at most {LOGIN_MAX_LENGTH} characters"));
        }

        // Password rules only apply to local accounts; LDAP accounts
        // carry no password at all.
        if self.kind == AccountType::Local {
            if self.password.is_empty() {
                errors.password = Some("Password is required".to_string());
            } else if self.password.chars().count() > PASSWORD_MAX_LENGTH {
                errors.password = Some(format!(
                    "Password must be at most {PASSWORD_MAX_LENGTH} characters"
                ));
            }
        }

        errors
    }

    /// Convert the draft into a full [`AccountUpdate`].
    ///
    /// An LDAP draft clears the stored password explicitly; a local draft
    /// replaces it with the draft's password.
    #[must_use]
    pub fn into_update(self) -> AccountUpdate {
        let label = Some(self.parse_labels());
        let password = match self.kind {
            AccountType::Ldap => Some(None),
            AccountType::Local => Some(Some(self.password)),
        };
        AccountUpdate {
            label,
            kind: Some(self.kind),
            login: Some(self.login),
            password,
        }
    }

    /// Validate, then convert.
    ///
    /// The first field error is rolled up into a single
    /// [`CoreError::ValidationError`].
    pub fn try_into_update(self) -> CoreResult<AccountUpdate> {
        let errors = self.validate();
        if let Some(msg) = errors
            .label
            .or(errors.kind)
            .or(errors.login)
            .or(errors.password)
        {
            return Err(CoreError::ValidationError(msg));
        }
        Ok(self.into_update())
    }
}
