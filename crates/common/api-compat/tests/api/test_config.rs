//! Tests for the process-wide warning switch.

use api_compat::api::{ExperimentalMarking, mark_experimental, warn_experimental};
use api_compat::config::{
    experimental_warnings_enabled, reset_experimental_warnings_enabled,
    set_experimental_warnings_enabled,
};
use serial_test::serial;

use crate::support::record_warnings;

#[test]
#[serial]
fn test_disabled_switch_silences_markers() {
    record_warnings(|recorder| {
        let f = mark_experimental(ExperimentalMarking::function("switched"), |x: i32| -x);

        set_experimental_warnings_enabled(false);
        assert!(!experimental_warnings_enabled());
        assert_eq!(f.call(1), -1);
        assert!(!warn_experimental(f.marking()));
        assert!(recorder.experimental().is_empty());

        set_experimental_warnings_enabled(true);
        assert_eq!(f.call(1), -1);
        assert_eq!(recorder.experimental().len(), 1);

        reset_experimental_warnings_enabled();
    });
}
