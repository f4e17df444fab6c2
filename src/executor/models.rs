/// Status and body of the single exchange, consumed once by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResult {
    pub status: u16,
    pub body: String,
}

/// How a completed exchange was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Json,
    /// 200 with a body that is not JSON; shown unchanged.
    RawFallback,
    Unauthorized,
    Upstream(u16),
}

impl Report {
    pub fn is_success(self) -> bool {
        matches!(self, Report::Json | Report::RawFallback)
    }
}
