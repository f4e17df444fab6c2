mod models;
mod printer;
mod request;
mod runner;

pub use models::{HttpResult, Report};
pub use printer::{print_request_plan, render_pretty, report_response};
pub use request::{build_client, build_request};
pub use runner::{fetch_settings, send_request};
