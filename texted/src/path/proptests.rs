//! Property-based tests for path resolution.

use super::normalize::eliminate_dot_segments;
use super::resolver::PathResolver;
use crate::error::PathError;
use crate::path::environment::MockEnvironment;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn canonical_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn dot_or_component() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        component_strategy(),
    ]
}

fn dotted_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(dot_or_component(), 1..10).prop_map(|parts| format!("/{}", parts.join("/")))
}

/// Paths that start with a plain name, so no shorthand applies.
fn relative_path_strategy() -> impl Strategy<Value = String> {
    (
        component_strategy(),
        prop::collection::vec(dot_or_component(), 0..10),
    )
        .prop_map(|(first, rest)| {
            let mut parts = vec![first];
            parts.extend(rest);
            parts.join("/")
        })
}

fn fixed_env() -> MockEnvironment {
    let mut env = MockEnvironment::new();
    env.expect_home_variable()
        .returning(|| Some("/home/tester".to_string()));
    env.expect_user_record_home().returning(|| None);
    env.expect_current_dir()
        .returning(|| Ok("/work/project/src".to_string()));
    env
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    /// Canonical absolute paths come back unchanged.
    #[test]
    fn canonical_paths_are_fixed_points(path in canonical_path_strategy()) {
        let resolver = PathResolver::with_environment(fixed_env());
        prop_assert_eq!(resolver.resolve(&path).unwrap(), path);
    }

    /// Resolving a resolved path changes nothing.
    #[test]
    fn resolution_is_idempotent(path in dotted_path_strategy()) {
        let resolver = PathResolver::with_environment(fixed_env());
        let once = resolver.resolve(&path).unwrap();
        let twice = resolver.resolve(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// For rooted input, no interior `.` or any `..` segment survives, and the
    /// result stays rooted.
    #[test]
    fn no_dot_segments_remain(path in dotted_path_strategy()) {
        let resolver = PathResolver::with_environment(fixed_env());
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert!(resolved.starts_with('/'));
        prop_assert!(!resolved.contains("/./"));
        prop_assert!(!resolved.contains("/../"));
        prop_assert!(!resolved.ends_with("/.."));
    }

    /// Relative input never turns into an absolute path.
    #[test]
    fn relative_input_stays_relative(path in relative_path_strategy()) {
        let resolver = PathResolver::with_environment(fixed_env());
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert!(!resolved.starts_with('/'), "{} resolved to {}", path, resolved);
    }

    /// Relative input loses every `..` segment.
    #[test]
    fn relative_parent_segments_vanish(path in relative_path_strategy()) {
        let resolver = PathResolver::with_environment(fixed_env());
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert!(!resolved.contains("/../"));
        prop_assert!(!resolved.starts_with("../"));
        prop_assert!(!resolved.ends_with("/.."));
        prop_assert_ne!(resolved.as_str(), "..");
    }

    /// `x/..` at the front of a relative path cancels out.
    #[test]
    fn relative_parent_cancels_segment(a in component_strategy(), b in component_strategy()) {
        let input = format!("{a}/../{b}");
        prop_assert_eq!(eliminate_dot_segments(&input), b);
    }

    /// Inserting `./` between segments is invisible.
    #[test]
    fn current_dir_segments_vanish(a in component_strategy(), b in component_strategy()) {
        let with_dot = format!("/{a}/./{b}");
        prop_assert_eq!(eliminate_dot_segments(&with_dot), format!("/{a}/{b}"));
    }

    /// `x/..` cancels out.
    #[test]
    fn parent_cancels_segment(
        a in component_strategy(),
        b in component_strategy(),
        c in component_strategy(),
    ) {
        let input = format!("/{a}/{b}/../{c}");
        prop_assert_eq!(eliminate_dot_segments(&input), format!("/{a}/{c}"));
    }

    /// The output never exceeds the bound.
    #[test]
    fn output_respects_bound(path in "[a-z/.~]{0,80}", max in 2usize..64) {
        let resolver = PathResolver::with_environment(fixed_env()).with_max_path(max);
        match resolver.resolve(&path) {
            Ok(resolved) => prop_assert!(resolved.len() < max),
            Err(PathError::InputTooLong { .. } | PathError::ExpansionTooLong { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
