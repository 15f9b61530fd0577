use std::error::Error;

use linkstash::types::errors::*;

// === FetchError Tests ===

#[test]
fn fetch_error_display_variants() {
    assert_eq!(
        FetchError::InvalidUrl("ftp://x".to_string()).to_string(),
        "Invalid fetch url: ftp://x"
    );
    assert_eq!(
        FetchError::Timeout("https://slow.example".to_string()).to_string(),
        "Fetch timed out: https://slow.example"
    );
    assert_eq!(FetchError::Status(404).to_string(), "Fetch returned status 404");
    assert_eq!(FetchError::EmptyBody.to_string(), "Fetch returned an empty body");
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::DuplicateLink("https://a.example".to_string()).to_string(),
        "Link already stored: https://a.example"
    );
    assert_eq!(StoreError::NotFound(7).to_string(), "Bookmark not found: 7");
    assert_eq!(
        StoreError::EmptyLink.to_string(),
        "Bookmark link must not be empty"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StoreError::DatabaseError(_)));
    assert!(err.to_string().starts_with("Bookmark database error:"));
}

// === DispatchError Tests ===

#[test]
fn dispatch_error_messages_are_client_facing() {
    assert_eq!(DispatchError::Validation("url").to_string(), "missing url");
    assert_eq!(
        DispatchError::InvalidParam {
            field: "id",
            value: "abc".to_string()
        }
        .to_string(),
        "invalid id: abc"
    );
    assert_eq!(
        DispatchError::InvalidAction("rename".to_string()).to_string(),
        "invalid action: rename"
    );
}

#[test]
fn fetch_failure_hides_transport_detail() {
    let err = DispatchError::Fetch(FetchError::Transport("dns failure".to_string()));
    assert_eq!(err.to_string(), "could not fetch");
    let source = err.source().expect("fetch error keeps its cause");
    assert_eq!(source.to_string(), "Fetch transport error: dns failure");
}

#[test]
fn store_errors_pass_through_dispatch() {
    let err: DispatchError = StoreError::NotFound(3).into();
    assert_eq!(err.to_string(), "Bookmark not found: 3");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::InvalidKey("bad.key".to_string()).to_string(),
        "Invalid settings key: bad.key"
    );
}

#[test]
fn errors_box_into_dyn_error() {
    let err: Box<dyn Error> = Box::new(SettingsError::InvalidValue("x".to_string()));
    assert!(err.source().is_none());
}
