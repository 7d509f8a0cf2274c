#![cfg(feature = "dev")]
//! Tests for configuration and input validation.

use bytestats::internals::engine::validator::{Validator, MAX_WIDTH};
use bytestats::internals::primitives::errors::StatsError;

// ============================================================================
// Input Validation
// ============================================================================

/// Test that empty input is rejected and non-empty input accepted.
#[test]
fn test_validate_non_empty() {
    let empty: [u8; 0] = [];

    assert_eq!(
        Validator::validate_non_empty(&empty),
        Err(StatsError::EmptyInput)
    );
    assert!(Validator::validate_non_empty(&[1u8]).is_ok());
}

// ============================================================================
// Parameter Validation
// ============================================================================

/// Test column bounds.
#[test]
fn test_validate_columns() {
    assert_eq!(
        Validator::validate_columns(0),
        Err(StatsError::InvalidColumns(0))
    );
    assert!(Validator::validate_columns(1).is_ok());
    assert!(Validator::validate_columns(10).is_ok());
}

/// Test width bounds.
#[test]
fn test_validate_width() {
    assert_eq!(Validator::validate_width(0), Err(StatsError::InvalidWidth(0)));
    assert!(Validator::validate_width(1).is_ok());
    assert!(Validator::validate_width(MAX_WIDTH).is_ok());
    assert_eq!(
        Validator::validate_width(MAX_WIDTH + 1),
        Err(StatsError::InvalidWidth(MAX_WIDTH + 1))
    );
}

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("width")),
        Err(StatsError::DuplicateParameter { parameter: "width" })
    );
}

// ============================================================================
// Error Messages
// ============================================================================

/// Test that error messages carry the offending value.
#[test]
fn test_error_display() {
    assert_eq!(StatsError::EmptyInput.to_string(), "Input array is empty");
    assert_eq!(
        StatsError::InvalidWidth(0).to_string(),
        "Invalid width: 0 (must be in [1, 20])"
    );
    assert_eq!(
        StatsError::InvalidColumns(0).to_string(),
        "Invalid columns: 0 (must be at least 1)"
    );
    assert!(StatsError::SumOverflow { len: 3 }
        .to_string()
        .contains("3 values"));
    assert!(StatsError::DuplicateParameter { parameter: "columns" }
        .to_string()
        .contains("'columns'"));
}
