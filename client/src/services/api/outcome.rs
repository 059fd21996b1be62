//! # Outcome
//!
//! Result of every façade operation: live backend data, or fixture data
//! served because the request failed.
//!
//! ```rust
//! use lms_client::services::api::{Outcome, TransportError};
//!
//! let live = Outcome::Live(vec![1, 2]);
//! assert!(live.is_live());
//!
//! let degraded = Outcome::Fallback {
//!     data: Vec::<i32>::new(),
//!     cause: TransportError::new(None, "Network error"),
//! };
//! assert!(degraded.is_fallback());
//! assert!(degraded.data().is_empty());
//! ```

use std::future::Future;

use super::transport::TransportError;

/// Tagged result of a fail-soft operation.
///
/// An empty live list (`Live(vec![])`) and a fallback are distinct: callers
/// that want to show a degraded-mode banner check [`Outcome::is_fallback`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Fallback { data: T, cause: TransportError },
}

impl<T> Outcome<T> {
    pub fn data(&self) -> &T {
        match self {
            Outcome::Live(data) | Outcome::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Outcome::Live(data) | Outcome::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    /// Why fixture data was served, if it was.
    pub fn cause(&self) -> Option<&TransportError> {
        match self {
            Outcome::Live(_) => None,
            Outcome::Fallback { cause, .. } => Some(cause),
        }
    }

    /// Transform the payload, keeping the tag and cause.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Live(data) => Outcome::Live(f(data)),
            Outcome::Fallback { data, cause } => Outcome::Fallback {
                data: f(data),
                cause,
            },
        }
    }
}

/// Await `request`; on failure log a warning and serve `fallback()` instead.
pub(crate) async fn fail_soft<T, F>(
    operation: &'static str,
    request: F,
    fallback: impl FnOnce() -> T,
) -> Outcome<T>
where
    F: Future<Output = Result<T, TransportError>>,
{
    match request.await {
        Ok(data) => Outcome::Live(data),
        Err(cause) => {
            tracing::warn!(
                operation,
                status = ?cause.status,
                error = %cause,
                "Request failed, serving fallback data"
            );
            Outcome::Fallback {
                data: fallback(),
                cause,
            }
        }
    }
}
