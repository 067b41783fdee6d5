// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum stored length of a shift or proposal title.
const MAX_TITLE_LENGTH: usize = 255;

/// Maximum stored length of a manager comment.
const MAX_COMMENT_LENGTH: usize = 1024;

/// Validates a shift or proposal title.
///
/// # Errors
///
/// Returns `DomainError::InvalidTitle` if the title is empty, whitespace
/// only, or longer than 255 characters.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates an employee display name and role pair.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmployeeField` if either value is empty
/// or whitespace only.
pub fn validate_employee_display(name: &str, role: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeField(String::from(
            "Employee name cannot be empty",
        )));
    }
    if role.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeField(String::from(
            "Employee role cannot be empty",
        )));
    }
    Ok(())
}

/// Validates an optional manager comment.
///
/// # Errors
///
/// Returns `DomainError::InvalidComment` if the comment exceeds 1024
/// characters (the storage column limit).
pub fn validate_comment(comment: Option<&str>) -> Result<(), DomainError> {
    if let Some(comment) = comment
        && comment.len() > MAX_COMMENT_LENGTH
    {
        return Err(DomainError::InvalidComment(format!(
            "Comment cannot exceed {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}
