use crate::utils::error::{Field, FieldError, RegistroError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims `value` and rejects it when nothing is left.
pub fn validate_non_empty_string(field: Field, value: &str) -> std::result::Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty(field));
    }
    Ok(trimmed.to_string())
}

/// Parses an employee number, telling apart text that is not a number from
/// numbers that are zero or negative.
pub fn validate_employee_number(value: &str) -> std::result::Result<u64, FieldError> {
    let text = value.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotANumber);
    }
    if negative {
        return Err(FieldError::NotPositive);
    }

    // Digits beyond u64 cannot be stored.
    let parsed: u64 = digits.parse().map_err(|_| FieldError::NotANumber)?;
    validate_positive(parsed)
}

pub fn validate_positive(value: u64) -> std::result::Result<u64, FieldError> {
    if value == 0 {
        return Err(FieldError::NotPositive);
    }
    Ok(value)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistroError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(RegistroError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert_eq!(
            validate_non_empty_string(Field::Name, "  Ana Pérez \n").unwrap(),
            "Ana Pérez"
        );
        assert_eq!(
            validate_non_empty_string(Field::Specialty, "   "),
            Err(FieldError::Empty(Field::Specialty))
        );
        assert_eq!(
            validate_non_empty_string(Field::Name, ""),
            Err(FieldError::Empty(Field::Name))
        );
    }

    #[test]
    fn test_validate_employee_number() {
        assert_eq!(validate_employee_number("7"), Ok(7));
        assert_eq!(validate_employee_number(" 101\n"), Ok(101));
        assert_eq!(validate_employee_number("abc"), Err(FieldError::NotANumber));
        assert_eq!(validate_employee_number("3.5"), Err(FieldError::NotANumber));
        assert_eq!(validate_employee_number(""), Err(FieldError::NotANumber));
        assert_eq!(validate_employee_number("0"), Err(FieldError::NotPositive));
        assert_eq!(validate_employee_number("-5"), Err(FieldError::NotPositive));
        assert_eq!(validate_employee_number("-0"), Err(FieldError::NotPositive));
        assert_eq!(validate_employee_number("+7"), Ok(7));
        assert_eq!(validate_employee_number("- 5"), Err(FieldError::NotANumber));
        assert_eq!(validate_employee_number("-"), Err(FieldError::NotANumber));
    }

    #[test]
    fn test_validate_employee_number_outside_i64() {
        assert_eq!(
            validate_employee_number("-9223372036854775809"),
            Err(FieldError::NotPositive)
        );
        assert_eq!(
            validate_employee_number("9223372036854775808"),
            Ok(9_223_372_036_854_775_808)
        );
        assert_eq!(
            validate_employee_number("18446744073709551616"),
            Err(FieldError::NotANumber)
        );
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", ".").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "out\0put").is_err());
    }
}
