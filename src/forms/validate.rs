//! Input Validation

/// Email shape check shared by both controllers
///
/// Matches the usual `local@domain.tld` shape: no whitespace, no second
/// `@`, and a dot somewhere after the domain starts.
pub fn is_valid_email(email: &str) -> bool {
    match regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}
