//! Outcome of the last load or apply attempt

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::ThemeError;

/// Snapshot of whether theming took effect
///
/// `applied` is authoritative. A success after an earlier failure keeps the
/// old error around, so the presence of an error does not mean the last
/// attempt failed.
#[derive(Clone, Debug, Default)]
pub struct ThemeStatus {
    applied: Option<bool>,
    error_reason: Option<Arc<ThemeError>>,
}

impl ThemeStatus {
    /// `None` until a theme was applied or a load/apply attempt failed
    pub fn applied(&self) -> Option<bool> {
        self.applied
    }

    /// Cause of the most recent failure, if any attempt ever failed
    pub fn error_reason(&self) -> Option<&ThemeError> {
        self.error_reason.as_deref()
    }

    /// Check whether no attempt has been recorded
    pub fn is_unset(&self) -> bool {
        self.applied.is_none()
    }

    /// Collapse the pair into a single result
    ///
    /// `None` when unset, `Ok` when applied, otherwise the recorded error.
    pub fn outcome(&self) -> Option<Result<(), Arc<ThemeError>>> {
        match self.applied? {
            true => Some(Ok(())),
            false => self.error_reason.clone().map(Err),
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.applied = Some(true);
    }

    pub(crate) fn record_failure(&mut self, error: ThemeError) {
        self.applied = Some(false);
        self.error_reason = Some(Arc::new(error));
    }
}

impl Display for ThemeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.applied, self.error_reason()) {
            (None, _) => write!(f, "not applied (using built-in colors)"),
            (Some(true), _) => write!(f, "applied"),
            (Some(false), Some(err)) => write!(f, "failed: {err}"),
            (Some(false), None) => write!(f, "failed"),
        }
    }
}
