//! Field validation for the login and registration forms.
//!
//! Rules and messages match what the backend enforces, so a form that passes
//! here is not bounced for formatting.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const PASSWORD_MIN_LENGTH: usize = 9;
const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '#'];

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    let local_ok = !local.is_empty() && local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err("Invalid email format");
    };
    let host_ok = !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    if local_ok && host_ok && tld_ok {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

pub fn validate_mobile(mobile: &str) -> Result<(), &'static str> {
    if mobile.is_empty() {
        return Err("Mobile number is required");
    }
    let cleaned: String = mobile
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Invalid mobile number (10-15 digits required)")
    }
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err("Password must be at least 9 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    if !password.contains(PASSWORD_SPECIALS) {
        return Err("Password must contain at least one special character (@$!%*?&#)");
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Full name is required");
    }
    if name.chars().count() < 3 {
        return Err("Name must be at least 3 characters long");
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err("Name can only contain letters and spaces");
    }
    Ok(())
}
