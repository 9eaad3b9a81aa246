//! Column-width checks for request DTOs.
//!
//! Entities store trimmed text, so widths are measured after trimming.

use validator::ValidationError;

fn fits(value: &str, max: usize, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().chars().count() <= max {
        return Ok(());
    }
    let mut err = ValidationError::new("length");
    err.message = Some(format!("{field} must be at most {max} characters").into());
    Err(err)
}

pub fn name_width(value: &str) -> Result<(), ValidationError> { fits(value, 255, "name") }

pub fn variation_width(value: &str) -> Result<(), ValidationError> { fits(value, 255, "variation") }

pub fn code_width(value: &str) -> Result<(), ValidationError> { fits(value, 50, "code") }

pub fn zip_width(value: &str) -> Result<(), ValidationError> { fits(value, 9, "zip") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_does_not_count() {
        let code = format!("  {}  ", "X".repeat(50));
        assert!(code_width(&code).is_ok());
        assert!(name_width(&format!(" {} ", "n".repeat(255))).is_ok());
        assert!(zip_width(" 01001-000 ").is_ok());
    }

    #[test]
    fn test_width_counts_characters() {
        assert!(zip_width("ççççççççç").is_ok());
        let err = zip_width("0123456789").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("zip must be at most 9 characters"));
        assert!(variation_width(&"v".repeat(256)).is_err());
    }
}
