use crate::error::InputError;

pub fn parse_single(input: &str) -> Result<String, InputError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(InputError::EmptyUrl);
    }
    Ok(url.to_string())
}

/// One URL per line. Lines are trimmed and blank ones dropped; order is kept.
pub fn parse_multiple(input: &str) -> Result<Vec<String>, InputError> {
    let urls: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(InputError::NoUrls);
    }
    Ok(urls)
}
