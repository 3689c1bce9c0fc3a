/// Routing prefix every relative request path is resolved under.
///
/// Always rooted, never ends with `/` unless it is the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self("/".to_owned())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `/api` + `/users` = `/api/users`. An empty path yields the base itself.
    pub fn join(&self, path: &str) -> String {
        if path.is_empty() {
            return self.0.clone();
        }
        let prefix = self.0.trim_end_matches('/');
        format!("{}/{}", prefix, path.trim_start_matches('/'))
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::new(crate::utils::constants::DEFAULT_BASE_PATH)
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `scheme://...` or protocol-relative `//host/...`.
pub fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    match path.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
