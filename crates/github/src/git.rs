//! Local git inspection.

use regex::Regex;
use std::process::Command;
use tracing::debug;

/// Resolve the commit a check run should be attached to.
///
/// On `pull_request` events the checkout is GitHub's synthetic merge commit,
/// whose subject reads `Merge <head-sha> into <base-sha>`; the head SHA is used
/// then so the check shows up on the pull request's own commit. Returns `None`
/// when git is unavailable or `HEAD` cannot be resolved.
#[must_use]
pub fn current_commit_sha() -> Option<String> {
    let sha = git(&["rev-parse", "HEAD"])?;
    debug!(sha = %sha, "Resolved HEAD");

    let subject = git(&["show", sha.as_str(), "-s", "--format=%s"]).unwrap_or_default();
    match parse_merge_sha(&subject) {
        Some(head) => {
            debug!(head = %head, "HEAD is a pull request merge commit");
            Some(head)
        }
        None => Some(sha),
    }
}

/// Extract the head SHA from a merge commit subject.
#[must_use]
pub fn parse_merge_sha(subject: &str) -> Option<String> {
    let pattern = Regex::new(r"(?i)Merge (\w+) into \w+").ok()?;
    pattern
        .captures(subject)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        debug!(
            args = ?args,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "git command failed"
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!stdout.is_empty()).then_some(stdout)
}
