//! Input validation utilities

use crate::constants;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate a person's first or last name
pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.len() > 64 {
        return Err("Name must be at most 64 characters");
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err("Name contains invalid characters");
    }
    Ok(())
}

/// Validate court surface type
pub fn validate_surface(surface: &str) -> Result<(), &'static str> {
    if constants::surfaces::ALL.contains(&surface) {
        Ok(())
    } else {
        Err("Unsupported court surface")
    }
}

/// Validate a court number within its facility
pub fn validate_court_number(number: i32) -> Result<(), &'static str> {
    if number < constants::MIN_COURT_NUMBER {
        return Err("Court number must be at least 1");
    }
    if number > constants::MAX_COURT_NUMBER {
        return Err("Court number must be at most 99");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_person_name() {
        assert!(validate_person_name("Maria").is_ok());
        assert!(validate_person_name("  ").is_err());
        assert!(validate_person_name("O'Neill-Schmidt").is_ok());
    }

    #[test]
    fn test_validate_surface() {
        assert!(validate_surface("clay").is_ok());
        assert!(validate_surface("grass").is_ok());
        assert!(validate_surface("ice").is_err());
    }

    #[test]
    fn test_validate_court_number() {
        assert!(validate_court_number(1).is_ok());
        assert!(validate_court_number(99).is_ok());
        assert!(validate_court_number(0).is_err());
        assert!(validate_court_number(100).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Center Court \u{0007} "), "Center Court");
    }
}
