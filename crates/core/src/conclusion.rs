//! Check-run conclusions and the breaking-change override.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final verdict of a check run.
///
/// Only `Success`, `Failure` and `Neutral` are produced by the diff; the
/// remaining GitHub values are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    /// The schema change is acceptable
    Success,
    /// The schema change breaks consumers
    Failure,
    /// Nothing to judge
    Neutral,
    /// Cancelled by the platform
    Cancelled,
    /// Skipped by the platform
    Skipped,
    /// Timed out on the platform
    TimedOut,
    /// Requires additional action
    ActionRequired,
    /// Marked stale by the platform
    Stale,
}

impl Conclusion {
    /// Wire name used by the check-run API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Neutral => "neutral",
            Self::Cancelled => "cancelled",
            Self::Skipped => "skipped",
            Self::TimedOut => "timed_out",
            Self::ActionRequired => "action_required",
            Self::Stale => "stale",
        }
    }

    /// Whether the process should end in a failed state
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the reported conclusion.
///
/// A failing diff becomes a success when breaking changes are not configured
/// to fail the check, or when the change request carries the approval label.
/// Any other conclusion is returned unchanged.
#[must_use]
pub const fn resolve_conclusion(
    raw: Conclusion,
    fail_on_breaking: bool,
    has_approval_label: bool,
) -> Conclusion {
    match raw {
        Conclusion::Failure if !fail_on_breaking || has_approval_label => Conclusion::Success,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_forced_to_success_when_not_failing_on_breaking() {
        assert_eq!(
            resolve_conclusion(Conclusion::Failure, false, false),
            Conclusion::Success
        );
    }

    #[test]
    fn test_failure_forced_to_success_when_approved() {
        assert_eq!(
            resolve_conclusion(Conclusion::Failure, true, true),
            Conclusion::Success
        );
    }

    #[test]
    fn test_failure_kept() {
        assert_eq!(
            resolve_conclusion(Conclusion::Failure, true, false),
            Conclusion::Failure
        );
    }

    #[test]
    fn test_non_failures_untouched() {
        for raw in [
            Conclusion::Success,
            Conclusion::Neutral,
            Conclusion::Cancelled,
            Conclusion::TimedOut,
        ] {
            for fail_on_breaking in [true, false] {
                for approved in [true, false] {
                    assert_eq!(resolve_conclusion(raw, fail_on_breaking, approved), raw);
                }
            }
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Conclusion::TimedOut).unwrap(),
            "\"timed_out\""
        );
        assert_eq!(Conclusion::ActionRequired.to_string(), "action_required");
    }
}
