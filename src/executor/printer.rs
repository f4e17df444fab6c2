use std::io::{self, Write};

use colored::{Color, Colorize};
use serde_json::Value;
use url::Url;

use crate::env::AuthMode;

use super::models::{HttpResult, Report};

const UNAUTHORIZED_GUIDANCE: [&str; 3] = [
    "Unauthorized (401). Token/session probably expired or invalid.",
    "If you used a cookie, try copying the latest cookie from your browser.",
    "If you used an access token, refresh it and try again.",
];

pub fn print_request_plan(out: &mut impl Write, mode: AuthMode, url: &Url) -> io::Result<()> {
    writeln!(out, "{}", mode.describe().dimmed())?;
    writeln!(out, "{} {}", "Requesting:".bold(), url.as_str().cyan())
}

/// Indented rendering of `body`, or `None` when it is not JSON.
pub fn render_pretty(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// Writes the status line and body. Informational text goes to `out`,
/// diagnostics to `err`. Every status is reported exactly once.
pub fn report_response(
    result: &HttpResult,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Report> {
    let status_color = if result.status >= 400 {
        Color::Red
    } else if result.status >= 300 {
        Color::Yellow
    } else {
        Color::Green
    };
    writeln!(
        out,
        "{} {}",
        "HTTP status:".bold(),
        result.status.to_string().color(status_color)
    )?;

    match result.status {
        200 => match render_pretty(&result.body) {
            Some(pretty) => {
                writeln!(out, "{}", "Response JSON:".bold())?;
                writeln!(out, "{pretty}")?;
                Ok(Report::Json)
            }
            None => {
                writeln!(
                    err,
                    "{}",
                    "Response body is not valid JSON, showing it unchanged.".yellow()
                )?;
                writeln!(out, "{}", "Response (raw):".bold())?;
                writeln!(out, "{}", result.body)?;
                Ok(Report::RawFallback)
            }
        },
        401 => {
            for line in UNAUTHORIZED_GUIDANCE {
                writeln!(err, "{}", line.red())?;
            }
            Ok(Report::Unauthorized)
        }
        status => {
            writeln!(err, "{}", "Non-OK response body:".bold())?;
            writeln!(err, "{}", result.body)?;
            Ok(Report::Upstream(status))
        }
    }
}
