//! Command dispatcher for linkstash.
//!
//! Turns one [`Request`] into at most one store mutation and a [`Response`].
//! Every failure is converted to an error response here; nothing escapes to
//! the caller, so the serving loop can always carry on with the next request.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::tag_formatter::{format_title, render_html};
use crate::services::title_extractor::extract_title;
use crate::types::errors::{DispatchError, StoreError};
use crate::types::request::{Action, Request, Response};

/// A submitted URL field split into the URL and the text typed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub url: String,
    pub append_text: String,
}

/// Splits the `url` field at its first space.
///
/// Everything before the space is the URL, everything after it (trimmed) is
/// free text appended to the fetched title. Surrounding whitespace is ignored.
pub fn parse_submission(raw: &str) -> Submission {
    let raw = raw.trim();
    let (url, rest) = raw.split_once(' ').unwrap_or((raw, ""));
    Submission {
        url: url.to_string(),
        append_text: rest.trim().to_string(),
    }
}

/// `force` is on for any non-empty value other than `0`, `false`, `off`, `no`.
pub fn parse_force(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(
            v.to_ascii_lowercase().as_str(),
            "0" | "false" | "off" | "no"
        ),
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DispatchError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(DispatchError::Validation(field))
}

fn parse_id(value: Option<&str>) -> Result<i64, DispatchError> {
    let raw = required(value, "id")?;
    raw.trim().parse().map_err(|_| DispatchError::InvalidParam {
        field: "id",
        value: raw.to_string(),
    })
}

/// Handles one request.
///
/// Returns `None` when the request names no action at all; such requests are
/// not meant for the dispatcher and get no response body.
pub fn dispatch(app: &App, request: &Request) -> Option<Response> {
    let action_name = request
        .action
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())?;

    let requested_id = request.id.as_deref().filter(|id| !id.is_empty());
    let mut response = Response::pending(requested_id);

    let outcome = match Action::parse(action_name) {
        Some(action) => execute(app, action, request, &mut response),
        None => Err(DispatchError::InvalidAction(action_name.to_string())),
    };

    Some(match outcome {
        Ok(()) => response.succeed(),
        Err(e) => {
            match &e {
                DispatchError::Internal(_) => error!(action = action_name, error = %e, "request failed"),
                DispatchError::Fetch(source) => {
                    warn!(action = action_name, error = %source, "fetch failed")
                }
                _ => warn!(action = action_name, error = %e, "request rejected"),
            }
            response.fail(e.to_string())
        }
    })
}

/// Handles one newline-delimited JSON request and returns the serialized
/// response, if any.
///
/// Malformed JSON and panics inside the handlers still produce a diagnostic
/// response so the client is never left waiting.
pub fn dispatch_line(app: &App, line: &str) -> Option<String> {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(Response::pending(None).fail(format!("parse error: {}", e)).to_json());
        }
    };

    match panic::catch_unwind(AssertUnwindSafe(|| dispatch(app, &request))) {
        Ok(response) => response.map(|r| r.to_json()),
        Err(_) => {
            let e = DispatchError::Internal("handler panicked".to_string());
            error!(error = %e, "request aborted");
            Some(
                Response::pending(request.id.as_deref())
                    .fail(e.to_string())
                    .to_json(),
            )
        }
    }
}

fn execute(
    app: &App,
    action: Action,
    request: &Request,
    response: &mut Response,
) -> Result<(), DispatchError> {
    debug!(action = action.as_str(), "dispatching");
    match action {
        Action::Add => add(app, request, response),
        Action::Delete => delete(app, request),
        Action::SetTitle => set_title(app, request, response),
        Action::SetLink => set_link(app, request, response),
    }
}

fn add(app: &App, request: &Request, response: &mut Response) -> Result<(), DispatchError> {
    let force = parse_force(request.force.as_deref());
    response.force = Some(force);
    let raw = required(request.url.as_deref(), "url")?;
    response.url = Some(raw.to_string());

    let submission = parse_submission(raw);

    // A forced add follows a failed fetch, so the page is not requested again.
    let body = if force {
        debug!(url = %submission.url, "forced add, storing fallback title");
        None
    } else {
        Some(app.fetcher().fetch(&submission.url).map_err(DispatchError::Fetch)?)
    };

    let title = extract_title(body.as_deref(), &submission.url, &submission.append_text);
    let id = app.with_store(|store| store.insert(&title, &submission.url))?;
    info!(id, url = %submission.url, title = %title, "bookmark added");

    response.id = Value::String(id.to_string());
    fill_title(response, &title);
    Ok(())
}

fn delete(app: &App, request: &Request) -> Result<(), DispatchError> {
    let id = parse_id(request.id.as_deref())?;
    let affected = app.with_store(|store| store.delete(id))?;
    if affected == 0 {
        return Err(StoreError::NotFound(id).into());
    }
    info!(id, "bookmark deleted");
    Ok(())
}

fn set_title(app: &App, request: &Request, response: &mut Response) -> Result<(), DispatchError> {
    if let Some(title) = request.title.as_deref() {
        response.raw_title = Some(title.to_string());
    }
    let id = parse_id(request.id.as_deref())?;
    let title = required(request.title.as_deref(), "title")?;

    let affected = app.with_store(|store| store.update_title(id, title))?;
    if affected == 0 {
        return Err(StoreError::NotFound(id).into());
    }
    info!(id, title, "bookmark retitled");
    fill_title(response, title);
    Ok(())
}

fn set_link(app: &App, request: &Request, response: &mut Response) -> Result<(), DispatchError> {
    if let Some(link) = request.link.as_deref() {
        response.link = Some(link.to_string());
    }
    let id = parse_id(request.id.as_deref())?;
    let link = required(request.link.as_deref(), "link")?;

    let affected = app.with_store(|store| store.update_link(id, link))?;
    if affected == 0 {
        return Err(StoreError::NotFound(id).into());
    }
    info!(id, link, "bookmark relinked");
    Ok(())
}

/// Sets the rendered title, the raw title and the tag links on a response.
fn fill_title(response: &mut Response, raw_title: &str) {
    let formatted = format_title(raw_title);
    response.title = Some(render_html(&formatted));
    response.raw_title = Some(raw_title.to_string());
    response.tags = Some(formatted.tags);
}
