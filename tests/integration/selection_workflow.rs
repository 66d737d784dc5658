//! End-to-end selection workflow against an in-memory provider.

use endpointctl::error::{ControllerError, ProviderError};
use endpointctl::provider::{MemoryEndpoint, MemoryProvider};
use endpointctl::selection::{self, Outcome, Request, SelectionEngine};
use endpointctl::snapshot::Snapshot;
use endpointctl::DeviceState;

fn speakers_and_headset() -> MemoryProvider {
    MemoryProvider::new()
        .with_device("A", "Speakers")
        .with_device("B", "Headset")
}

#[test]
fn test_list_two_devices_default_format() {
    let provider = speakers_and_headset();
    let outcome = selection::run(&provider, &Request::List { template: None }).unwrap();

    match outcome {
        Outcome::Listed { lines } => {
            assert_eq!(lines.join("\n"), "Audio Device 1: Speakers\nAudio Device 2: Headset");
        }
        other => panic!("expected Listed, got {:?}", other),
    }
    assert!(provider.default_requests().is_empty());
}

#[test]
fn test_select_second_device() {
    let provider = speakers_and_headset();
    let outcome = selection::run(&provider, &Request::SelectByIndex { index: 2 }).unwrap();

    assert_eq!(
        outcome,
        Outcome::Selected {
            identifier: "B".to_string()
        }
    );
    assert_eq!(provider.default_requests(), vec!["B"]);
    assert_eq!(provider.default_endpoint().as_deref(), Some("B"));
}

#[test]
fn test_select_missing_index() {
    let provider = speakers_and_headset();
    let err = selection::run(&provider, &Request::SelectByIndex { index: 5 }).unwrap_err();

    assert!(matches!(err, ControllerError::IndexOutOfRange(5)));
    assert_eq!(err.to_string(), "No audio end-point device with the index '5'");
    assert!(provider.default_requests().is_empty());
}

#[test]
fn test_zero_devices() {
    let provider = MemoryProvider::new();
    let outcome = selection::run(&provider, &Request::List { template: None }).unwrap();
    assert_eq!(outcome.count(), 0);

    for index in [1, 2, 100] {
        let err = selection::run(&provider, &Request::SelectByIndex { index }).unwrap_err();
        assert!(matches!(err, ControllerError::IndexOutOfRange(i) if i == index));
    }
    assert!(provider.default_requests().is_empty());
}

#[test]
fn test_inactive_devices_do_not_shift_indices() {
    let provider = MemoryProvider::new()
        .with_endpoint(MemoryEndpoint::new("X", Some("Monitor")).with_state(DeviceState::Disabled))
        .with_device("A", "Speakers")
        .with_endpoint(MemoryEndpoint::new("Y", Some("Dock")).with_state(DeviceState::Unplugged))
        .with_device("B", "Headset");

    let outcome = selection::run(&provider, &Request::List { template: None }).unwrap();
    assert_eq!(
        outcome,
        Outcome::Listed {
            lines: vec![
                "Audio Device 1: Speakers".to_string(),
                "Audio Device 2: Headset".to_string(),
            ]
        }
    );

    selection::run(&provider, &Request::SelectByIndex { index: 2 }).unwrap();
    assert_eq!(provider.default_requests(), vec!["B"]);
}

#[test]
fn test_unnamed_device_still_listed() {
    let provider = MemoryProvider::new()
        .with_endpoint(MemoryEndpoint::new("A", None))
        .with_device("B", "Headset");
    let request = Request::List {
        template: Some("[%d] %s".to_string()),
    };

    let outcome = selection::run(&provider, &request).unwrap();
    assert_eq!(
        outcome,
        Outcome::Listed {
            lines: vec!["[1] ".to_string(), "[2] Headset".to_string()]
        }
    );
}

#[test]
fn test_unnamed_device_can_be_selected() {
    let provider = MemoryProvider::new().with_endpoint(MemoryEndpoint::new("A", None));
    let outcome = selection::run(&provider, &Request::SelectByIndex { index: 1 }).unwrap();
    assert_eq!(
        outcome,
        Outcome::Selected {
            identifier: "A".to_string()
        }
    );
}

#[test]
fn test_enumeration_failure_is_fatal() {
    let code = 0x8889_0008_u32 as i32;
    let provider = speakers_and_headset().fail_enumeration(ProviderError::new(code, "audio service not running"));

    for request in [
        Request::List { template: None },
        Request::SelectByIndex { index: 1 },
    ] {
        let err = selection::run(&provider, &request).unwrap_err();
        assert!(matches!(err, ControllerError::Enumeration(_)));
        assert_eq!(err.exit_code(), code);
    }
    assert!(provider.default_requests().is_empty());
}

#[test]
fn test_default_set_failure_is_reported_once() {
    let code = 0x8007_0005_u32 as i32;
    let provider = speakers_and_headset().fail_set_default(ProviderError::new(code, "Access is denied."));

    let err = selection::run(&provider, &Request::SelectByIndex { index: 1 }).unwrap_err();
    assert!(matches!(err, ControllerError::DefaultSet { .. }));
    assert_eq!(err.exit_code(), code);
    assert_eq!(provider.default_requests(), vec!["A"]);
}

#[test]
fn test_engine_reuses_snapshot_without_requery() {
    let provider = speakers_and_headset();
    let snapshot = Snapshot::capture(&provider).unwrap();
    let engine = SelectionEngine::new(&provider);

    engine
        .execute(&Request::List { template: None }, &snapshot)
        .unwrap();
    engine
        .execute(&Request::SelectByIndex { index: 2 }, &snapshot)
        .unwrap();

    assert_eq!(provider.enumeration_count(), 1);
    assert_eq!(provider.default_requests(), vec!["B"]);
}
