use sea_orm::DbErr;

/// Parses a Discord snowflake stored as text.
///
/// # Arguments
/// - `value` - The stored id
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub fn parse_discord_id(value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse Discord id '{}': {}", value, e)))
}

/// Trims and lowercases an email address for storage and comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks that an email has a local part, an `@` and a dotted domain, without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
