//! Cancellable waits shared by the polling loops
//!
//! Callers pin an interrupt future once and hand it to every wait; when it
//! resolves the wait fails with `Cancelled` and the raced future is dropped.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use log::{debug, warn};

use crate::error::{OktaError, Result};

/// Race `fut` against `cancel`
pub async fn or_cancel<F, C>(fut: F, cancel: &mut Pin<&mut C>) -> Result<F::Output>
where
    F: Future,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel.as_mut() => {
            debug!("Interrupted while waiting");
            Err(OktaError::Cancelled)
        }
        out = fut => Ok(out),
    }
}

/// Sleep for `duration` unless cancelled first
pub async fn sleep_or_cancel<C>(duration: Duration, cancel: &mut Pin<&mut C>) -> Result<()>
where
    C: Future<Output = ()>,
{
    or_cancel(tokio::time::sleep(duration), cancel).await
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
pub async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        futures::future::pending::<()>().await;
    }
}
