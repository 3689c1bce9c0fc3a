//! Pieces of the `api-client` binary that do not need a terminal.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use tracing::{error, info};

use crate::client::ApiClient;

#[derive(Debug)]
pub struct RequestOutcome {
    pub status: StatusCode,
    pub url: Url,
    pub body: String,
}

impl RequestOutcome {
    /// Non-2xx maps to a failing exit code.
    pub fn exit_code(&self) -> ExitCode {
        if self.status.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// One request through `client`. `headers` are `Name: value` strings and
/// replace the client's defaults of the same name.
pub async fn send_request(
    client: &ApiClient,
    method: &str,
    path: &str,
    data: Option<&str>,
    headers: &[String],
) -> Result<RequestOutcome> {
    let method: Method = method
        .to_uppercase()
        .parse()
        .map_err(|_| anyhow!("unsupported HTTP method '{}'", method))?;

    let mut request = client.request(method, path);
    for raw in headers {
        let (name, value) = parse_header(raw)?;
        request = request.header(name, value);
    }
    if let Some(data) = data {
        let body: serde_json::Value = serde_json::from_str(data).context("--data is not valid JSON")?;
        request = request.json(&body);
    }

    let response = request.send().await?;
    let status = response.status();
    let url = response.url().clone();
    info!("{} {}", status, url);
    if !status.is_success() {
        error!("request failed with status {}", status);
    }
    let body = response.text().await?;

    Ok(RequestOutcome { status, url, body })
}

/// `Name: value`, split on the first colon, both sides trimmed.
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header '{}' must look like 'Name: value'", raw))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("invalid header name in '{}'", raw))?;
    let value = HeaderValue::from_str(value.trim())
        .with_context(|| format!("invalid header value for '{}'", name))?;
    Ok((name, value))
}

/// First and last four characters, enough to tell tokens apart.
pub fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_splits_on_first_colon_and_trims() {
        let (name, value) = parse_header("X-Trace:  a:b ").unwrap();
        assert_eq!(name.as_str(), "x-trace");
        assert_eq!(value, "a:b");

        let (name, value) = parse_header("Authorization: Bearer other").unwrap();
        assert_eq!(name, reqwest::header::AUTHORIZATION);
        assert_eq!(value, "Bearer other");
    }

    #[test]
    fn header_without_colon_is_rejected() {
        let err = parse_header("X-Trace a").unwrap_err();
        assert!(err.to_string().contains("must look like 'Name: value'"));
    }

    #[test]
    fn header_with_bad_name_is_rejected() {
        assert!(parse_header("Bad Name: v").is_err());
        assert!(parse_header(": v").is_err());
    }

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc123"), "******");
        assert_eq!(mask("12345678"), "********");
    }

    #[test]
    fn long_tokens_keep_four_chars_each_side() {
        assert_eq!(mask("123456789"), "1234…6789");
        assert_eq!(mask("eyJhbGciOiJIUzI1NiJ9.payload.sig0"), "eyJh…sig0");
    }

    #[test]
    fn multibyte_tokens_are_masked_by_character() {
        assert_eq!(mask("令牌令牌令牌令牌令"), "令牌令牌…牌令牌令");
        assert_eq!(mask("ééééé"), "*****");
    }

    #[test]
    fn exit_code_follows_status() {
        let outcome = |status| RequestOutcome {
            status,
            url: Url::parse("http://localhost/api").unwrap(),
            body: String::new(),
        };
        assert_eq!(outcome(StatusCode::OK).exit_code(), ExitCode::SUCCESS);
        assert_eq!(outcome(StatusCode::NO_CONTENT).exit_code(), ExitCode::SUCCESS);
        assert_eq!(outcome(StatusCode::UNAUTHORIZED).exit_code(), ExitCode::FAILURE);
        assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR).exit_code(), ExitCode::FAILURE);
    }
}
