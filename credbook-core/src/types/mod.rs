//! Type definition module

mod account;
mod form;

pub use account::{Account, AccountType, AccountUpdate, Label, NewAccount};
pub use form::{
    AccountDraft, DraftErrors, LABEL_MAX_LENGTH, LOGIN_MAX_LENGTH, PASSWORD_MAX_LENGTH,
};
