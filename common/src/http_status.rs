//! HTTP status classification for response interpretation.

/// HTTP status code as observed on the wire.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Lower bound (inclusive) of the success range.
    pub const SUCCESS_FLOOR: u16 = 200;

    /// Upper bound (exclusive) of the success range.
    ///
    /// The remote API only signals request failure with 4xx/5xx, so 3xx
    /// responses count as success.
    pub const SUCCESS_CEILING: u16 = 400;

    /// Status in `[200, 400)`.
    pub fn is_success(&self) -> bool {
        (Self::SUCCESS_FLOOR..Self::SUCCESS_CEILING).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
