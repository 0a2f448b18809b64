use std::fmt;
use url::Url;

pub const TOKEN_PARAM: &str = "id_token";

/// Identity token handed to the page by the sign-in redirect.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Per-page session. Built once at startup and passed to the API client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }

    /// Parse a location fragment (`#id_token=...&token_type=Bearer`) as a
    /// query string. The first `id_token` wins; an empty value counts as absent.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let token = url::form_urlencoded::parse(fragment.as_bytes())
            .find(|(key, _)| key == TOKEN_PARAM)
            .and_then(|(_, value)| SessionToken::new(value.into_owned()));
        Self { token }
    }

    pub fn from_url(url: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url)?;
        Ok(parsed
            .fragment()
            .map(Self::from_fragment)
            .unwrap_or_default())
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Value for the `Authorization` header: the token, verbatim.
    pub fn authorization(&self) -> Option<&str> {
        self.token.as_ref().map(SessionToken::as_str)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
