//! Checklist extraction from host replies
//!
//! The host is instructed to format each suggestion as a checklist
//! line with a fixed prefix. Everything else in the reply is ignored.

use tracing::debug;

/// Extract checklist item texts from a reply
///
/// Retains lines whose trimmed content starts with `prefix`, strips
/// the prefix and surrounding whitespace, and drops lines that are
/// empty after stripping.
pub fn extract_items(reply: &str, prefix: &str) -> Vec<String> {
    let items: Vec<String> = reply
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            let rest = trimmed.strip_prefix(prefix)?;
            let text = rest.trim();
            if text.is_empty() { None } else { Some(text.to_string()) }
        })
        .collect();

    debug!(count = items.len(), "extracted checklist items");
    items
}
