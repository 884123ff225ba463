//! Resolution of a renamed parameter into one value.
//!
//! A value is "provided" when it is `Some`, regardless of what it holds, so
//! `Some(false)` or `Some("")` passed under the old name still count.

use crate::error::{Error, Result};

/// Resolve a deprecated parameter and its replacement into one value.
///
/// - both provided: [`Error::AmbiguousParameter`], `coerce_old_to_new` is
///   not called
/// - only `new_val`: returned unchanged
/// - only `old_val`: returned through `coerce_old_to_new`
/// - neither: `Ok(None)`, leaving the default to the caller
///
/// # Example
///
/// ```
/// use api_compat::api::normalize_renamed_param;
///
/// fn is_new(old_flag: Option<bool>, new_flag: Option<bool>) -> Option<bool> {
///     normalize_renamed_param("old_flag", old_flag, "new_flag", new_flag, |v: bool| !v)
///         .expect("only one of the flags is passed")
/// }
///
/// assert_eq!(is_new(Some(false), None), Some(true));
/// assert_eq!(is_new(None, Some(false)), Some(false));
/// assert_eq!(is_new(None, None), None);
/// ```
pub fn normalize_renamed_param<O, N>(
    old_arg: &str,
    old_val: Option<O>,
    new_arg: &str,
    new_val: Option<N>,
    coerce_old_to_new: impl FnOnce(O) -> N,
) -> Result<Option<N>> {
    match (old_val, new_val) {
        (Some(_), Some(_)) => Err(Error::ambiguous_parameter(old_arg, new_arg)),
        (None, Some(new)) => Ok(Some(new)),
        (Some(old), None) => Ok(Some(coerce_old_to_new(old))),
        (None, None) => Ok(None),
    }
}

/// [`normalize_renamed_param`] for renames that kept the value's type.
pub fn normalize_renamed_param_unchanged<T>(
    old_arg: &str,
    old_val: Option<T>,
    new_arg: &str,
    new_val: Option<T>,
) -> Result<Option<T>> {
    normalize_renamed_param(old_arg, old_val, new_arg, new_val, std::convert::identity)
}

/// [`normalize_renamed_param`] with a coercion that can fail.
///
/// A coercion error is returned as is.
pub fn try_normalize_renamed_param<O, N, E>(
    old_arg: &str,
    old_val: Option<O>,
    new_arg: &str,
    new_val: Option<N>,
    coerce_old_to_new: impl FnOnce(O) -> std::result::Result<N, E>,
) -> std::result::Result<Option<N>, E>
where
    E: From<Error>,
{
    match (old_val, new_val) {
        (Some(_), Some(_)) => Err(Error::ambiguous_parameter(old_arg, new_arg).into()),
        (None, Some(new)) => Ok(Some(new)),
        (Some(old), None) => coerce_old_to_new(old).map(Some),
        (None, None) => Ok(None),
    }
}

/// Resolve a renamed parameter at the call site.
///
/// ```
/// use api_compat::renamed_param;
///
/// let timeout: Option<u64> = None;
/// let timeout_secs: Option<u64> = Some(30);
/// let resolved = renamed_param!(old = "timeout" => timeout, new = "timeout_secs" => timeout_secs);
/// assert_eq!(resolved, Ok(Some(30)));
/// ```
#[macro_export]
macro_rules! renamed_param {
    (
        old = $old_name:expr => $old_value:expr,
        new = $new_name:expr => $new_value:expr $(,)?
    ) => {
        $crate::api::normalize_renamed_param_unchanged(
            $old_name, $old_value, $new_name, $new_value,
        )
    };
    (
        old = $old_name:expr => $old_value:expr,
        new = $new_name:expr => $new_value:expr,
        coerce = $coerce:expr $(,)?
    ) => {
        $crate::api::normalize_renamed_param(
            $old_name, $old_value, $new_name, $new_value, $coerce,
        )
    };
}
