use anyhow::{Result, anyhow, bail};
use hyper::header::{HeaderName, HeaderValue};
use hyper::http::Uri;
use std::fmt;

/// HTTP method, kept exactly as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method(pub hyper::Method);

impl Method {
    /// Parses any HTTP token as a method
    ///
    /// There is no list of known methods: `PURGE` or even `get` are sent
    /// verbatim. Only text that cannot appear on the wire is rejected.
    pub fn parse(method: &str) -> Result<Self> {
        if method.is_empty() {
            bail!("HTTP method cannot be empty");
        }
        hyper::Method::from_bytes(method.as_bytes())
            .map(Method)
            .map_err(|_| anyhow!("Invalid HTTP method: '{}'", method))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Method {
    fn default() -> Self {
        Method(hyper::Method::GET)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a validated absolute URL
#[derive(Debug, Clone)]
pub struct Url {
    raw: String,
    uri: Uri,
}

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL carrying a scheme
    /// * `Err(anyhow::Error)` - If the URL is invalid or has no scheme
    pub fn parse(url: &str) -> Result<Self> {
        match url.parse::<Uri>() {
            Ok(uri) if uri.scheme().is_some() => Ok(Url {
                raw: url.to_string(),
                uri,
            }),
            Ok(_) if has_scheme_prefix(url) => Err(anyhow!(
                "Invalid URL '{}': unsupported form, expected scheme://host[/path]",
                url
            )),
            Err(e) if has_scheme_prefix(url) => Err(anyhow!("Invalid URL '{}': {}", url, e)),
            _ => Err(anyhow!(
                "Invalid URL '{}': missing scheme (e.g. https://)",
                url
            )),
        }
    }

    /// Returns the URL exactly as it was given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}

/// True when `url` starts with `scheme:` (ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ))
fn has_scheme_prefix(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One `key:value` header argument
///
/// The key keeps the user's spelling for echoing; `name` is the wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    key: String,
    value: String,
    name: HeaderName,
    header_value: HeaderValue,
}

impl HeaderEntry {
    /// Splits on the first colon, so values may contain colons themselves
    pub fn parse(raw: &str) -> Result<Self> {
        let (key, value) = raw
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid header format: '{}'. Use 'Key: Value'", raw))?;
        if key.is_empty() || value.is_empty() {
            bail!("Invalid header format: '{}'. Use 'Key: Value'", raw);
        }

        let key = key.trim();
        let value = value.trim();
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| anyhow!("Invalid header name: '{}'", key))?;
        let header_value = HeaderValue::from_bytes(value.as_bytes())
            .map_err(|_| anyhow!("Invalid header value for '{}': '{}'", key, value))?;

        Ok(HeaderEntry {
            key: key.to_string(),
            value: value.to_string(),
            name,
            header_value,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header_value
    }
}

impl fmt::Display for HeaderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.value())
    }
}

/// Represents a raw request body, sent as UTF-8 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(pub String);

impl RawBody {
    pub fn new(data: &str) -> Self {
        RawBody(data.to_string())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
