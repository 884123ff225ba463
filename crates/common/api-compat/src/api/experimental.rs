use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;

use super::suppression::experimental_warnings_suppressed;
use super::warnings::{ExperimentalWarning, SUPPRESSION_TARGET};
use crate::config::experimental_warnings_enabled;

thread_local! {
    static DISPATCHING: RefCell<Vec<Cow<'static, str>>> = const { RefCell::new(Vec::new()) };
}

/// What kind of item an [`ExperimentalMarking`] is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectKind {
    #[default]
    Function,
    Type,
    Parameter,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Type => "type",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records that a callable or type is experimental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentalMarking {
    name: Cow<'static, str>,
    kind: ObjectKind,
    message: Option<String>,
    addendum: Option<String>,
}

#[bon::bon]
impl ExperimentalMarking {
    #[builder]
    pub fn new(
        #[builder(into)] name: Cow<'static, str>,
        #[builder(default)] kind: ObjectKind,
        #[builder(into)] message: Option<String>,
        #[builder(into)] addendum: Option<String>,
    ) -> Self {
        Self {
            name,
            kind,
            message,
            addendum,
        }
    }

    pub fn function(name: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().name(name).build()
    }

    pub fn for_type(name: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().name(name).kind(ObjectKind::Type).build()
    }

    pub fn with_addendum(mut self, addendum: impl Into<String>) -> Self {
        self.addendum = Some(addendum.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The warning this marking produces on an unsuppressed call.
    pub fn warning(&self) -> ExperimentalWarning {
        let message = match &self.message {
            Some(msg) => msg.clone(),
            None => {
                let mut msg = format!(
                    "The {} `{}` is experimental. It may change or be removed in any release, \
                     including patch releases.",
                    self.kind, self.name
                );
                if let Some(addendum) = &self.addendum {
                    msg.push(' ');
                    msg.push_str(addendum);
                }
                msg
            }
        };

        ExperimentalWarning::new(self.name.clone(), message)
    }
}

/// Emit the experimental warning for `marking` unless the current flow is
/// inside a quiet scope or warnings are disabled.
///
/// Returns whether a warning was emitted.
pub fn warn_experimental(marking: &ExperimentalMarking) -> bool {
    if experimental_warnings_suppressed() {
        tracing::trace!(
            target: SUPPRESSION_TARGET,
            subject = marking.name(),
            "experimental warning suppressed"
        );
        return false;
    }
    if !experimental_warnings_enabled() {
        return false;
    }

    marking.warning().emit();
    true
}

/// Warn that `param` of the stable function `func` is experimental.
pub fn warn_experimental_param(param: &str, func: &str) -> bool {
    let marking = ExperimentalMarking::builder()
        .name(param.to_string())
        .kind(ObjectKind::Parameter)
        .message(format!(
            "The parameter `{}` of `{}` is experimental. It may change or be removed in any \
             release, including patch releases.",
            param, func
        ))
        .build();
    warn_experimental(&marking)
}

struct DispatchGuard;

impl DispatchGuard {
    /// Warn for `marking` unless the same subject is already being
    /// dispatched on this thread, then mark it as in flight.
    fn enter(marking: &ExperimentalMarking) -> Self {
        let in_flight = DISPATCHING.with(|stack| stack.borrow().contains(&marking.name));
        if !in_flight {
            warn_experimental(marking);
        }
        DISPATCHING.with(|stack| stack.borrow_mut().push(marking.name.clone()));
        Self
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        let _ = DISPATCHING.try_with(|stack| stack.borrow_mut().pop());
    }
}

/// Mark `f` as experimental.
///
/// To mark an [`Experimental`] again use [`Experimental::mark`], which
/// returns it as is. Wrapping a closure that calls an [`Experimental`] under
/// the same name does not add a second warning either.
pub fn mark_experimental<F>(marking: ExperimentalMarking, f: F) -> Experimental<F> {
    Experimental { marking, inner: f }
}

/// A callable that warns on every call made outside a quiet scope.
///
/// Arguments are passed as a single value; callables taking several
/// arguments take a tuple.
#[derive(Debug, Clone)]
pub struct Experimental<F> {
    marking: ExperimentalMarking,
    inner: F,
}

impl<F> Experimental<F> {
    pub fn marking(&self) -> &ExperimentalMarking {
        &self.marking
    }

    /// Mark an already experimental callable again.
    ///
    /// The callable is returned unchanged and keeps its original marking, so
    /// each call still warns at most once.
    pub fn mark(self, _marking: ExperimentalMarking) -> Self {
        self
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let _dispatch = DispatchGuard::enter(&self.marking);
        (self.inner)(args)
    }

    pub fn call0<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        let _dispatch = DispatchGuard::enter(&self.marking);
        (self.inner)()
    }

    pub fn into_fn<A, R>(self) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        move |args| self.call(args)
    }
}

/// A type whose construction path is experimental.
///
/// Only construction goes through the check, methods on existing values
/// never warn. Implement with [`experimental_type!`](crate::experimental_type).
pub trait ExperimentalType {
    const NAME: &'static str;

    fn experimental_marking() -> ExperimentalMarking {
        ExperimentalMarking::for_type(Self::NAME)
    }
}

/// Run a constructor of the experimental type `T`.
///
/// `build`'s return value is passed through untouched, so fallible
/// constructors keep their `Result`.
pub fn construct_experimental<T, R>(build: impl FnOnce() -> R) -> R
where
    T: ExperimentalType,
{
    let marking = T::experimental_marking();
    let _dispatch = DispatchGuard::enter(&marking);
    build()
}

/// Implement [`ExperimentalType`] for a type.
#[macro_export]
macro_rules! experimental_type {
    ($ty:ident) => {
        impl $crate::api::ExperimentalType for $ty {
            const NAME: &'static str = stringify!($ty);
        }
    };
    ($ty:ident, addendum = $addendum:expr) => {
        impl $crate::api::ExperimentalType for $ty {
            const NAME: &'static str = stringify!($ty);

            fn experimental_marking() -> $crate::api::ExperimentalMarking {
                $crate::api::ExperimentalMarking::for_type(Self::NAME).with_addendum($addendum)
            }
        }
    };
}

/// Inline experimental check for the top of a function body.
#[macro_export]
macro_rules! experimental {
    ($name:expr) => {
        $crate::api::warn_experimental(&$crate::api::ExperimentalMarking::function($name))
    };
    ($name:expr, addendum = $addendum:expr) => {
        $crate::api::warn_experimental(
            &$crate::api::ExperimentalMarking::function($name).with_addendum($addendum),
        )
    };
}
