//! Markdown summary of detected changes for the check-run output.

use crate::change::{Change, Criticality};

/// Maximum number of change bullets written into a check-run summary.
pub const SUMMARY_CHANGE_LIMIT: usize = 100;

/// Generate a markdown summary of the detected changes.
///
/// Changes are grouped by criticality. At most `limit` bullets are written in
/// total; the remainder is collapsed into a single trailing line since the
/// check-run summary field is size-limited.
#[must_use]
pub fn create_summary(changes: &[Change], limit: usize) -> String {
    if changes.is_empty() {
        return "No changes detected".to_string();
    }

    let count = |level: Criticality| changes.iter().filter(|c| c.criticality == level).count();

    let mut md = String::new();
    md.push_str(&format!(
        "# Found {} change{}\n\n",
        changes.len(),
        if changes.len() == 1 { "" } else { "s" }
    ));

    for level in [Criticality::Breaking, Criticality::Dangerous, Criticality::Safe] {
        md.push_str(&format!("{}: {}\n", level.label(), count(level)));
    }

    let mut remaining = limit;
    for level in [Criticality::Breaking, Criticality::Dangerous, Criticality::Safe] {
        if remaining == 0 {
            break;
        }

        let section: Vec<&Change> = changes
            .iter()
            .filter(|c| c.criticality == level)
            .take(remaining)
            .collect();
        if section.is_empty() {
            continue;
        }

        md.push_str(&format!("\n## {} changes\n\n", level.label()));
        for change in &section {
            md.push_str(&format!("- {}\n", format_message(&change.message)));
        }
        remaining -= section.len();
    }

    let written = limit - remaining;
    if written < changes.len() {
        md.push_str(&format!("\n... and {} more changes\n", changes.len() - written));
    }

    md
}

/// Highlight quoted schema coordinates as inline code.
///
/// A quote opens at the start of a word and closes at the end of one, so
/// apostrophes inside quoted values are kept.
fn format_message(message: &str) -> String {
    let chars: Vec<char> = message.chars().collect();
    let mut formatted = String::with_capacity(message.len());
    let mut open = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == '\'' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1);
            if !open && before.is_none_or(|b| !b.is_alphanumeric()) {
                open = true;
                formatted.push('`');
                continue;
            }
            if open && after.is_none_or(|a| !a.is_alphanumeric()) {
                open = false;
                formatted.push('`');
                continue;
            }
        }
        formatted.push(c);
    }

    formatted
}
