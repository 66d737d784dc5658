//! Properties of one invocation over arbitrary device sets

use endpointctl::provider::{MemoryEndpoint, MemoryProvider};
use endpointctl::selection::{self, Outcome, Request};
use endpointctl::{ControllerError, DeviceState};
use proptest::prelude::*;

fn endpoint_strategy() -> impl Strategy<Value = (Option<String>, DeviceState)> {
    let name = proptest::option::weighted(0.8, "[A-Za-z][A-Za-z0-9 ]{0,15}");
    let state = prop_oneof![
        4 => Just(DeviceState::Active),
        1 => Just(DeviceState::Disabled),
        1 => Just(DeviceState::NotPresent),
        1 => Just(DeviceState::Unplugged),
    ];
    (name, state)
}

fn provider_for(specs: &[(Option<String>, DeviceState)]) -> MemoryProvider {
    MemoryProvider::from_endpoints(specs.iter().enumerate().map(|(i, (name, state))| {
        MemoryEndpoint::new(format!("{{dev-{}}}", i), name.as_deref()).with_state(*state)
    }))
}

fn active_count(specs: &[(Option<String>, DeviceState)]) -> usize {
    specs
        .iter()
        .filter(|(_, state)| *state == DeviceState::Active)
        .count()
}

/// One line per active device, numbered 1..=N, names or empty text in order
#[test]
fn test_listing_numbers_every_active_device() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec(endpoint_strategy(), 0..12),
            |specs| {
                let provider = provider_for(&specs);
                let outcome = selection::run(&provider, &Request::List { template: None }).unwrap();

                let expected: Vec<String> = specs
                    .iter()
                    .filter(|(_, state)| *state == DeviceState::Active)
                    .enumerate()
                    .map(|(i, (name, _))| {
                        format!("Audio Device {}: {}", i + 1, name.as_deref().unwrap_or(""))
                    })
                    .collect();

                prop_assert_eq!(outcome, Outcome::Listed { lines: expected });
                prop_assert!(provider.default_requests().is_empty());
                Ok(())
            },
        )
        .unwrap();
}

/// A valid index requests exactly one default change, for that device
#[test]
fn test_valid_index_selects_exactly_once() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(endpoint_strategy(), 1..12), any::<prop::sample::Index>()),
            |(specs, pick)| {
                let count = active_count(&specs);
                prop_assume!(count > 0);
                let index = pick.index(count) + 1;

                let provider = provider_for(&specs);
                let outcome = selection::run(
                    &provider,
                    &Request::SelectByIndex {
                        index: index as i64,
                    },
                )
                .unwrap();

                let (expected_pos, _) = specs
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, state))| *state == DeviceState::Active)
                    .nth(index - 1)
                    .unwrap();
                let expected_id = format!("{{dev-{}}}", expected_pos);

                prop_assert_eq!(
                    outcome,
                    Outcome::Selected {
                        identifier: expected_id.clone()
                    }
                );
                prop_assert_eq!(provider.default_requests(), vec![expected_id]);
                Ok(())
            },
        )
        .unwrap();
}

/// Indices outside 1..=N never change the default
#[test]
fn test_out_of_range_index_never_selects() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(endpoint_strategy(), 0..8), any::<i64>()),
            |(specs, index)| {
                let count = active_count(&specs) as i64;
                prop_assume!(index < 1 || index > count);

                let provider = provider_for(&specs);
                let err = selection::run(&provider, &Request::SelectByIndex { index }).unwrap_err();

                prop_assert!(matches!(err, ControllerError::IndexOutOfRange(i) if i == index));
                prop_assert_eq!(err.exit_code(), 1);
                prop_assert!(provider.default_requests().is_empty());
                Ok(())
            },
        )
        .unwrap();
}

/// Listing twice over unchanged devices yields identical output
#[test]
fn test_listing_is_repeatable() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec(endpoint_strategy(), 0..12),
            |specs| {
                let provider = provider_for(&specs);
                let request = Request::List {
                    template: Some("%d|%s".to_string()),
                };
                let first = selection::run(&provider, &request).unwrap();
                let second = selection::run(&provider, &request).unwrap();

                prop_assert_eq!(first.count(), active_count(&specs));
                prop_assert_eq!(first, second);
                Ok(())
            },
        )
        .unwrap();
}
