// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input checks shared by intake and the action engine.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 1_000_000;
pub const MAX_TAG_LENGTH: usize = 100;
pub const MAX_NOTE_LENGTH: usize = 200_000;
pub const MAX_REASON_LENGTH: usize = 500;
pub const MAX_TAGS_PER_ISSUE: usize = 20;
pub const MAX_ACTOR_LENGTH: usize = 100;

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::FieldTooLong { field, actual: value.len(), max });
    }
    Ok(())
}

/// Trims `value` and rejects it if nothing is left.
pub fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(trimmed.to_string())
}

/// Validate a title: non-blank and within length limits. Returns it trimmed.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = require("Title", title)?;
    check_length("Title", &trimmed, MAX_TITLE_LENGTH)?;
    Ok(trimmed)
}

/// Validate that a description is within length limits
pub fn validate_description(description: &str) -> Result<()> {
    check_length("Description", description, MAX_DESCRIPTION_LENGTH)
}

/// Validate a pause reason: non-blank and within length limits.
pub fn validate_reason(reason: &str) -> Result<String> {
    let trimmed = require("Reason", reason)?;
    check_length("Reason", &trimmed, MAX_REASON_LENGTH)?;
    Ok(trimmed)
}

/// Validate an optional reason. Blank reasons become `None`.
pub fn validate_optional_reason(reason: Option<&str>) -> Result<Option<String>> {
    match reason.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => {
            check_length("Reason", r, MAX_REASON_LENGTH)?;
            Ok(Some(r.to_string()))
        }
        None => Ok(None),
    }
}

/// Validate that a note is within length limits
pub fn validate_note(note: &str) -> Result<()> {
    check_length("Notes", note, MAX_NOTE_LENGTH)
}

/// Validate the user id recorded as `performed_by`.
pub fn validate_actor(actor: &str) -> Result<String> {
    let trimmed = require("Performed by", actor)?;
    check_length("Performed by", &trimmed, MAX_ACTOR_LENGTH)?;
    Ok(trimmed)
}

/// Validate an assignee. Blank assignees are an invalid target rather than
/// a plain validation failure.
pub fn validate_assignee(assignee: &str) -> Result<String> {
    let trimmed = assignee.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidTarget);
    }
    check_length("Assignee", trimmed, MAX_ACTOR_LENGTH)?;
    Ok(trimmed.to_string())
}

/// Validate a tag set: each tag within length limits, and no more than
/// [`MAX_TAGS_PER_ISSUE`] of them. Blank tags are dropped.
pub fn validate_tags<I, T>(tags: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out = BTreeSet::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        check_length("Tag", tag, MAX_TAG_LENGTH)?;
        out.insert(tag.to_string());
    }
    if out.len() > MAX_TAGS_PER_ISSUE {
        return Err(Error::TagLimitExceeded { max: MAX_TAGS_PER_ISSUE });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
