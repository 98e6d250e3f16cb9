#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and end-to-end account editing.

use std::sync::Arc;

use credbook_app::{AppStateBuilder, FileStore, MemoryStore};
use credbook_core::traits::BlobStore;
use credbook_core::types::{AccountDraft, AccountType, Label, NewAccount};
use credbook_core::{CoreError, STORAGE_KEY};

#[test]
fn builder_with_memory_backend_starts_empty() {
    let state = AppStateBuilder::new()
        .with_backend(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();
    assert!(state.account_store.is_empty());
}

#[test]
fn crud_sequence_through_app_state() {
    let backend = Arc::new(MemoryStore::new());
    let mut state = AppStateBuilder::new()
        .with_backend(Arc::clone(&backend) as Arc<dyn BlobStore>)
        .build()
        .unwrap();
    let store = &mut state.account_store;

    let id = store.add(NewAccount {
        label: vec![Label::new("work")],
        kind: AccountType::Local,
        login: "alice".to_string(),
        password: Some("p1".to_string()),
    });
    assert_eq!(store.len(), 1);

    // edit through the draft flow: switch to LDAP, which drops the password
    let mut draft = AccountDraft::from_account(store.get(&id).unwrap());
    draft.kind = AccountType::Ldap;
    draft.label_input = "work; directory".to_string();
    let update = draft.try_into_update().expect("draft should be valid");
    store.update(&id, update).unwrap();

    let account = store.get(&id).unwrap();
    assert_eq!(account.kind, AccountType::Ldap);
    assert_eq!(account.password, None);
    assert_eq!(
        account.label,
        vec![Label::new("work"), Label::new("directory")]
    );

    store.remove(&id).unwrap();
    assert!(store.is_empty());
    assert!(matches!(
        store.remove(&id),
        Err(CoreError::AccountNotFound(_))
    ));

    // final state is mirrored in the backend
    assert_eq!(backend.read(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn invalid_draft_is_rejected_before_it_reaches_the_store() {
    let mut state = AppStateBuilder::new()
        .with_backend(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();
    let id = state.account_store.create_empty();

    // a freshly seeded record fails validation until it is filled in
    let draft = AccountDraft::from_account(state.account_store.get(&id).unwrap());
    let errors = draft.validate();
    assert!(errors.login.is_some());
    assert!(errors.password.is_some());
}

#[test]
fn two_sessions_share_one_file_backend() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");

    let mut first = AppStateBuilder::new()
        .with_backend(Arc::new(FileStore::new(tmp.path())))
        .build()
        .unwrap();
    let id = first.account_store.add(NewAccount {
        label: Vec::new(),
        kind: AccountType::Local,
        login: "alice".to_string(),
        password: Some("p1".to_string()),
    });
    drop(first);

    let second = AppStateBuilder::new()
        .with_backend(Arc::new(FileStore::new(tmp.path())))
        .build()
        .unwrap();
    assert_eq!(second.account_store.get(&id).unwrap().login, "alice");
}
