//! Tests for renamed-parameter resolution.

use std::cell::Cell;

use api_compat::api::{RenamedParam, canonicalize_renamed_param, normalize_renamed_param};
use api_compat::{Error, renamed_param};
use serial_test::parallel;

use crate::support::record_warnings;

/// A function that renamed `old_flag` to `new_flag` and inverted its meaning.
fn is_new(old_flag: Option<bool>, new_flag: Option<bool>) -> api_compat::Result<Option<bool>> {
    normalize_renamed_param("old_flag", old_flag, "new_flag", new_flag, |val: bool| !val)
}

#[test]
fn test_backcompat_default() {
    assert_eq!(is_new(None, None), Ok(None));
}

#[test]
fn test_backcompat_new_flag() {
    assert_eq!(is_new(None, Some(false)), Ok(Some(false)));
}

#[test]
fn test_backcompat_old_flag() {
    assert_eq!(is_new(Some(false), None), Ok(Some(true)));
}

#[test]
fn test_backcompat_both_set() {
    let err = is_new(Some(false), Some(true)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Do not use deprecated \"old_flag\" now that you are using \"new_flag\"."
    );
    assert!(matches!(
        err,
        Error::AmbiguousParameter { ref old_arg, ref new_arg }
            if old_arg == "old_flag" && new_arg == "new_flag"
    ));
}

#[test]
fn test_coercion_never_called_without_old_value() {
    let calls = Cell::new(0);
    let coerce = |v: &str| {
        calls.set(calls.get() + 1);
        v.len()
    };

    assert_eq!(normalize_renamed_param("name", None, "label", None, coerce), Ok(None));
    assert_eq!(
        normalize_renamed_param("name", None, "label", Some(3usize), coerce),
        Ok(Some(3))
    );
    assert!(normalize_renamed_param("name", Some("ab"), "label", Some(3usize), coerce).is_err());
    assert_eq!(calls.get(), 0);

    assert_eq!(
        normalize_renamed_param("name", Some("abcd"), "label", None, coerce),
        Ok(Some(4))
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_values_count_as_provided() {
    assert_eq!(
        normalize_renamed_param("tags", Some(Vec::<String>::new()), "labels", None, |v| v),
        Ok(Some(Vec::new()))
    );
    assert!(
        normalize_renamed_param("limit", Some(0u32), "max_items", Some(0u32), |v| v).is_err()
    );
}

#[test]
fn test_macro_forms() {
    let old: Option<&str> = Some("a.txt");
    let new: Option<&str> = None;
    assert_eq!(
        renamed_param!(old = "path" => old, new = "dest" => new),
        Ok(Some("a.txt"))
    );

    let seconds: Option<u64> = Some(2);
    let millis: Option<u64> = None;
    assert_eq!(
        renamed_param!(
            old = "timeout_secs" => seconds,
            new = "timeout_ms" => millis,
            coerce = |s: u64| s * 1000,
        ),
        Ok(Some(2000))
    );
}

#[test]
#[parallel]
fn test_canonicalize_warns_only_for_old_name() {
    let param = RenamedParam::new("old_flag", "new_flag").with_removal("1.0");

    record_warnings(|recorder| {
        let resolved = canonicalize_renamed_param(&param, None, Some(true), |v: bool| !v);
        assert_eq!(resolved, Ok(Some(true)));
        assert!(recorder.deprecation().is_empty());

        let resolved = canonicalize_renamed_param(&param, Some(true), None, |v: bool| !v);
        assert_eq!(resolved, Ok(Some(false)));

        let warnings = recorder.deprecation();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].subject, "old_flag");
        assert_eq!(
            warnings[0].message,
            "The parameter `old_flag` is deprecated and will be removed in 1.0. Use `new_flag` instead."
        );
    });
}

#[test]
#[parallel]
fn test_canonicalize_ambiguous_does_not_warn() {
    let param = RenamedParam::new("old_flag", "new_flag");

    record_warnings(|recorder| {
        let resolved = canonicalize_renamed_param(&param, Some(true), Some(true), |v: bool| !v);
        assert!(resolved.is_err());
        assert!(recorder.deprecation().is_empty());
    });
}
