//! Best-effort steps and the per-event supervisor boundary.
//!
//! Both wrappers turn a fallible future into one that cannot fail: the error
//! is logged (sanitized) and swallowed. `best_effort` is for optional steps in
//! the middle of a flow, `supervise` wraps a whole event handler.

use std::fmt::Display;
use std::future::Future;

use crate::core::sanitize::sanitize;

/// Runs an optional step; on failure logs a warning and returns `None`.
///
/// # Example
///
/// ```no_run
/// # use formbot::core::best_effort::best_effort;
/// # async fn send_doc() -> Result<(), std::io::Error> { Ok(()) }
/// # async fn run() {
/// // The flow continues whether or not the document went out
/// let _ = best_effort("send info document", send_doc()).await;
/// # }
/// ```
pub async fn best_effort<T, E, F>(step: &str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Optional step '{}' failed: {}", step, sanitize(&e.to_string()));
            None
        }
    }
}

/// Runs a whole event handler; any error is logged and discarded.
///
/// Returns the handler's value, or `None` when it failed.
pub async fn supervise<T, E, F>(event: &str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!(
                "Error while handling {}: {}",
                sanitize(event),
                sanitize(&e.to_string())
            );
            None
        }
    }
}
