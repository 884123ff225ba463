//! Scopes in which experimental warnings are not emitted.
//!
//! Depth is tracked per logical flow: a `thread_local!` counter per tokio
//! task (or per thread outside any task) for synchronous scopes and a
//! `tokio::task_local!` counter for futures run
//! through [`quiet_experimental_warnings_async`]. A flow is quiet while
//! either counter is non-zero, so scopes never leak into sibling threads or
//! sibling tasks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;

use tokio::task::Id as TaskId;

use super::warnings::SUPPRESSION_TARGET;

thread_local! {
    /// Sync depth per flow on this thread. Tokio tasks get their own entry,
    /// everything outside a task (including a `block_on` root future) shares
    /// the `None` entry.
    static QUIET_DEPTH: RefCell<HashMap<Option<TaskId>, usize>> = RefCell::new(HashMap::new());
}

tokio::task_local! {
    static QUIET_TASK_DEPTH: usize;
}

/// Keeps experimental warnings quiet for the current flow until dropped.
///
/// Inside a tokio task the scope belongs to that task, so sibling tasks
/// polled on the same thread while the guard is held still warn. Guards
/// nest. Only dropping the outermost one makes warnings visible again. The
/// guard is `!Send` and must be dropped on the thread that created it.
#[must_use = "warnings are only suppressed while the guard is alive"]
#[derive(Debug)]
pub struct QuietGuard {
    flow: Option<TaskId>,
    _not_send: PhantomData<*const ()>,
}

impl QuietGuard {
    fn enter() -> Self {
        let flow = tokio::task::try_id();
        let depth = QUIET_DEPTH.with(|depths| {
            let mut depths = depths.borrow_mut();
            let depth = depths.entry(flow).or_insert(0);
            *depth += 1;
            *depth
        });
        tracing::trace!(target: SUPPRESSION_TARGET, depth, "entered quiet scope");

        Self {
            flow,
            _not_send: PhantomData,
        }
    }
}

impl Drop for QuietGuard {
    fn drop(&mut self) {
        let depth = QUIET_DEPTH
            .try_with(|depths| {
                let mut depths = depths.borrow_mut();
                let depth = match depths.get_mut(&self.flow) {
                    Some(depth) => {
                        *depth = depth.saturating_sub(1);
                        *depth
                    }
                    None => 0,
                };
                if depth == 0 {
                    depths.remove(&self.flow);
                }
                depth
            })
            .unwrap_or(0);
        tracing::trace!(target: SUPPRESSION_TARGET, depth, "left quiet scope");
    }
}

/// Suppress experimental warnings for the current flow for the guard's
/// lifetime.
pub fn suppress_experimental_warnings() -> QuietGuard {
    QuietGuard::enter()
}

/// Run `f` with experimental warnings suppressed.
///
/// The scope is released when `f` returns, returns an error, or panics.
pub fn with_quiet_experimental_warnings<R>(f: impl FnOnce() -> R) -> R {
    let _guard = QuietGuard::enter();
    f()
}

/// Run `future` to completion with experimental warnings suppressed for the
/// current task.
///
/// The depth lives in task-local storage, so tasks spawned from inside the
/// future start unsuppressed, as do sibling tasks on the same worker thread.
pub async fn quiet_experimental_warnings_async<F>(future: F) -> F::Output
where
    F: Future,
{
    let depth = task_depth() + 1;
    QUIET_TASK_DEPTH.scope(depth, future).await
}

/// Wrap `f` so that every invocation runs in a quiet scope.
pub fn quiet_experimental_warnings<F>(f: F) -> Quiet<F> {
    Quiet { inner: f }
}

/// A callable whose invocations run with experimental warnings suppressed.
///
/// Arguments are passed as a single value; callables taking several
/// arguments take a tuple.
#[derive(Debug, Clone, Copy)]
pub struct Quiet<F> {
    inner: F,
}

impl<F> Quiet<F> {
    /// Call the wrapped function inside a quiet scope.
    ///
    /// The scope ends when the function returns. For functions returning a
    /// future use [`Quiet::call_async`], otherwise the scope is gone before
    /// the future is first polled.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let _guard = QuietGuard::enter();
        (self.inner)(args)
    }

    pub fn call0<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        let _guard = QuietGuard::enter();
        (self.inner)()
    }

    /// Call a future-returning function and keep its future quiet until it
    /// completes.
    pub async fn call_async<A, Fut>(&self, args: A) -> Fut::Output
    where
        F: Fn(A) -> Fut,
        Fut: Future,
    {
        quiet_experimental_warnings_async(async { (self.inner)(args).await }).await
    }

    /// Turn the wrapper back into a plain closure with the wrapped
    /// signature.
    pub fn into_fn<A, R>(self) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        move |args| self.call(args)
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

/// Whether experimental warnings are currently suppressed for this flow.
pub fn experimental_warnings_suppressed() -> bool {
    suppression_depth() > 0
}

/// Number of quiet scopes currently open for this flow.
pub fn suppression_depth() -> usize {
    thread_depth() + task_depth()
}

fn thread_depth() -> usize {
    let flow = tokio::task::try_id();
    QUIET_DEPTH
        .try_with(|depths| depths.borrow().get(&flow).copied().unwrap_or(0))
        .unwrap_or(0)
}

fn task_depth() -> usize {
    QUIET_TASK_DEPTH.try_with(|depth| *depth).unwrap_or(0)
}
