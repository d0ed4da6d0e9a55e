//! Tests for the WASM-facing helpers and the load lifecycle.

use super::*;

fn ready() -> ModuleLifecycle {
    let lifecycle = ModuleLifecycle::new();
    init_internal(&lifecycle).expect("warm-up succeeds");
    lifecycle
}

#[test]
fn starts_uninitialized() {
    let lifecycle = ModuleLifecycle::new();
    assert_eq!(lifecycle.state(), LoadState::Uninitialized);
    assert_eq!(lifecycle.state().name(), "uninitialized");
}

#[test]
fn init_reaches_ready() {
    let lifecycle = ready();
    assert_eq!(lifecycle.state(), LoadState::Ready);
    assert!(lifecycle.ensure_ready().is_ok());
}

#[test]
fn init_is_idempotent_once_ready() {
    let lifecycle = ready();
    let mut ran = false;
    lifecycle
        .initialize(|| {
            ran = true;
            Ok(())
        })
        .unwrap();
    assert!(!ran);
    assert_eq!(lifecycle.state(), LoadState::Ready);
}

/// Conversion is refused until loading finishes.
#[test]
fn convert_requires_ready() {
    let lifecycle = ModuleLifecycle::new();
    let err = qr2stl_internal(&lifecycle, "A", "1", "50", "2").unwrap_err();
    assert!(matches!(
        err,
        HostError::Lifecycle(LifecycleError::NotReady { state: "uninitialized" })
    ));
    assert_eq!(
        err.to_string(),
        "Module is not ready (state: uninitialized); call init() first"
    );
}

#[test]
fn reentrant_init_is_rejected() {
    let lifecycle = ModuleLifecycle::new();
    let result = lifecycle.initialize(|| {
        assert_eq!(lifecycle.state(), LoadState::Loading);
        assert_eq!(
            lifecycle.ensure_ready(),
            Err(LifecycleError::NotReady { state: "loading" })
        );
        assert_eq!(
            lifecycle.initialize(|| Ok(())),
            Err(LifecycleError::AlreadyLoading)
        );
        Ok(())
    });
    assert!(result.is_ok());
    assert_eq!(lifecycle.state(), LoadState::Ready);
}

#[test]
fn failure_is_terminal() {
    let lifecycle = ModuleLifecycle::new();
    let first = lifecycle.initialize(|| Err("out of memory".to_string()));
    assert_eq!(first, Err(LifecycleError::Failed("out of memory".to_string())));
    assert_eq!(lifecycle.state().name(), "failed");

    // A later attempt replays the failure without running the loader.
    let second = lifecycle.initialize(|| Ok(()));
    assert_eq!(second, Err(LifecycleError::Failed("out of memory".to_string())));

    let err = qr2stl_internal(&lifecycle, "A", "1", "50", "2").unwrap_err();
    assert_eq!(err.to_string(), "Module failed to initialize: out of memory");
}

#[test]
fn converts_once_ready() {
    let lifecycle = ready();
    let stl = qr2stl_internal(&lifecycle, "A", "1", "50", "2").expect("conversion succeeds");
    assert_eq!(stl.len(), 84 + 600 * 227);
}

/// Conversion errors reach the host as their display message.
#[test]
fn conversion_errors_keep_message() {
    let lifecycle = ready();
    let err = qr2stl_internal(&lifecycle, "HELLO", "0", "50", "2").unwrap_err();
    assert!(matches!(
        err,
        HostError::Convert(ConvertError::InvalidParameter { name: "base_height", .. })
    ));
    assert_eq!(
        err.to_string(),
        "Invalid parameter `base_height`: must be greater than zero, got 0"
    );
}

#[test]
fn report_is_json() {
    let lifecycle = ready();
    let json = conversion_report_internal(&lifecycle, "HELLO", "1", "50", "2").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["dark_modules"], 222);
    assert_eq!(value["triangles"], 12 * 223);
}
