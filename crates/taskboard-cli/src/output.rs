use serde::Serialize;
use taskboard_workflow::{PageLoad, Submission};

use crate::context::CliContext;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

pub fn output_list<T: Serialize>(items: Vec<T>) -> anyhow::Result<()> {
    let count = items.len();
    output_success(ListResponse { items, count })
}

/// Print an error envelope to stderr and exit with status 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}

/// Exit unless the page finished loading.
pub fn require_loaded(ctx: &CliContext, load: PageLoad) {
    match load {
        PageLoad::Ready => {}
        PageLoad::Redirected => output_error(&redirect_message(ctx)),
        PageLoad::Unavailable => output_error(&failure_message(ctx, "page could not be loaded")),
    }
}

/// Print `data` for a completed submission, or exit with what went wrong.
pub fn output_submission<T: Serialize>(
    ctx: &CliContext,
    submission: Submission,
    data: T,
) -> anyhow::Result<()> {
    match submission {
        Submission::Completed => output_success(data),
        Submission::Cancelled => output_error("cancelled"),
        Submission::Ignored => output_error("nothing to submit"),
        Submission::Blocked | Submission::Failed => {
            if ctx.host.last_alert().is_none() {
                if let Some(location) = ctx.host.last_navigation() {
                    output_error(&format!("session ended, redirected to {}", location));
                }
            }
            output_error(&failure_message(ctx, "request failed"))
        }
    }
}

fn redirect_message(ctx: &CliContext) -> String {
    format!(
        "not signed in, redirected to {}",
        ctx.host
            .last_navigation()
            .map(|l| l.path())
            .unwrap_or_else(|| "/".to_string())
    )
}

fn failure_message(ctx: &CliContext, fallback: &str) -> String {
    ctx.host
        .last_alert()
        .unwrap_or_else(|| fallback.to_string())
}
