mod deprecation;
mod experimental;
mod renamed;
mod suppression;
mod warnings;

pub use deprecation::{RenamedParam, canonicalize_renamed_param};
pub use experimental::{
    Experimental, ExperimentalMarking, ExperimentalType, ObjectKind, construct_experimental,
    mark_experimental, warn_experimental, warn_experimental_param,
};
pub use renamed::{
    normalize_renamed_param, normalize_renamed_param_unchanged, try_normalize_renamed_param,
};
pub use suppression::{
    Quiet, QuietGuard, experimental_warnings_suppressed, quiet_experimental_warnings,
    quiet_experimental_warnings_async, suppress_experimental_warnings, suppression_depth,
    with_quiet_experimental_warnings,
};
pub use warnings::{
    DEPRECATION_TARGET, DeprecationWarning, EXPERIMENTAL_TARGET, ExperimentalWarning,
    SUPPRESSION_TARGET,
};
