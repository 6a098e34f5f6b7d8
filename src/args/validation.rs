use reqwest::Url;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_http_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value.trim()).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim().to_string()),
        other => Err(format!("'{value}' must use http or https, not {other}.")),
    }
}
