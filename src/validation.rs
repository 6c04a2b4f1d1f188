use crate::error::AppError;

/// Punctuation allowed in search terms and tags besides ASCII letters, digits and space
const TERM_PUNCTUATION: &[char] = &['.', '/', '+', '-', '\'', '?', ';', '"', ' '];

/// Columns the API accepts for `order_by`, each optionally prefixed with `-`
pub const ORDER_BY_FIELDS: &[&str] = &["id", "tags", "file_name", "file_type"];

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_RESULTS: u32 = 5;
pub const DEFAULT_ORDER_BY: &str = "id";

pub fn is_term_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || TERM_PUNCTUATION.contains(&c)
}

/// True if every character of `term` is allowed in a search term
pub fn is_valid_term(term: &str) -> bool {
    term.chars().all(is_term_char)
}

/// Returns `input` if it only contains allowed characters, otherwise `previous`
///
/// Rejected keystrokes are dropped silently.
pub fn validate_term(previous: &str, input: &str) -> String {
    if is_valid_term(input) {
        input.to_string()
    } else {
        log::debug!("Dropping search input with disallowed characters");
        previous.to_string()
    }
}

/// Validates a single tag before it is added to an item
pub fn validate_tag(tag: &str) -> Result<String, AppError> {
    let tag = tag.trim();

    if tag.is_empty() {
        return Err(AppError::Validation("Tag must not be empty".to_string()));
    }

    if tag.len() > 100 {
        return Err(AppError::Validation(
            "Tag must be at most 100 characters long".to_string(),
        ));
    }

    if !is_valid_term(tag) {
        return Err(AppError::Validation(format!(
            "{} contains invalid characters!",
            tag
        )));
    }

    Ok(tag.to_string())
}

/// Page number, falling back to the first page for anything but a positive integer
pub fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => DEFAULT_PAGE,
    }
}

/// Results per page, falling back to the server default
pub fn parse_results(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(results) if results >= 1 => results,
        _ => DEFAULT_RESULTS,
    }
}

/// Sort column, falling back to `id` for unknown columns
pub fn parse_order_by(value: &str) -> String {
    let field = value.strip_prefix('-').unwrap_or(value);
    if ORDER_BY_FIELDS.contains(&field) {
        value.to_string()
    } else {
        DEFAULT_ORDER_BY.to_string()
    }
}

pub fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::Validation(
            "This value needs to be True or False!".to_string(),
        )),
    }
}
