use anyhow::{anyhow, Result};
use reqwest::header::HeaderValue;

use crate::utils::constants::BEARER_SCHEME;

/// `Bearer <token>`, token attached verbatim and flagged sensitive.
pub fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("{} {}", BEARER_SCHEME, token))
        .map_err(|_| anyhow!("token contains characters not allowed in an HTTP header"))?;
    value.set_sensitive(true);
    Ok(value)
}
