//! HTTP client for the remote mock REST API.
//!
//! Every request carries the static `X-Custom-Header` and a fixed 1000 ms
//! timeout enforced client-side through an `AbortController`. A timeout is
//! reported as an ordinary failure; callers do not retry.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

/// Хост mock API по умолчанию; переопределяется глобалом на `window`.
pub const DEFAULT_API_BASE: &str = "https://650af08bdfd73d1fab093cfb.mockapi.io";

const API_BASE_GLOBAL: &str = "CATALOG_ADMIN_API_BASE";
const REQUEST_TIMEOUT_MS: u32 = 1_000;
const CUSTOM_HEADER: (&str, &str) = ("X-Custom-Header", "foobar");

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    Http(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    Http(u16),
}

/// Get the base URL for API requests
///
/// Reads the deploy-time override from `window.CATALOG_ADMIN_API_BASE`;
/// falls back to the default mock API host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return DEFAULT_API_BASE.to_string(),
    };
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_BASE_GLOBAL))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Arms the request timeout: aborts the controller after the fixed deadline
/// and flips the flag so the error path can tell a timeout from a network
/// failure.
fn arm_timeout() -> (Option<web_sys::AbortController>, Rc<Cell<bool>>) {
    let timed_out = Rc::new(Cell::new(false));
    let controller = web_sys::AbortController::new().ok();
    if let Some(c) = controller.clone() {
        let flag = timed_out.clone();
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            flag.set(true);
            c.abort();
        });
    }
    (controller, timed_out)
}

fn fetch_send_error(e: gloo_net::Error, timed_out: &Cell<bool>) -> FetchError {
    if timed_out.get() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

fn submit_send_error(e: gloo_net::Error, timed_out: &Cell<bool>) -> SubmitError {
    if timed_out.get() {
        SubmitError::Timeout
    } else {
        SubmitError::Network(e.to_string())
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = format!("{}{}", api_base(), path);
    let (controller, timed_out) = arm_timeout();
    let signal = controller.as_ref().map(|c| c.signal());

    let response = Request::get(&url)
        .header(CUSTOM_HEADER.0, CUSTOM_HEADER.1)
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| fetch_send_error(e, &timed_out))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), SubmitError> {
    let url = format!("{}{}", api_base(), path);
    let (controller, timed_out) = arm_timeout();
    let signal = controller.as_ref().map(|c| c.signal());

    let response = Request::post(&url)
        .header(CUSTOM_HEADER.0, CUSTOM_HEADER.1)
        .abort_signal(signal.as_ref())
        .json(body)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| submit_send_error(e, &timed_out))?;

    if !response.ok() {
        return Err(SubmitError::Http(response.status()));
    }
    Ok(())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), SubmitError> {
    let url = format!("{}{}", api_base(), path);
    let (controller, timed_out) = arm_timeout();
    let signal = controller.as_ref().map(|c| c.signal());

    let response = Request::put(&url)
        .header(CUSTOM_HEADER.0, CUSTOM_HEADER.1)
        .abort_signal(signal.as_ref())
        .json(body)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| submit_send_error(e, &timed_out))?;

    if !response.ok() {
        return Err(SubmitError::Http(response.status()));
    }
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), SubmitError> {
    let url = format!("{}{}", api_base(), path);
    let (controller, timed_out) = arm_timeout();
    let signal = controller.as_ref().map(|c| c.signal());

    let response = Request::delete(&url)
        .header(CUSTOM_HEADER.0, CUSTOM_HEADER.1)
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| submit_send_error(e, &timed_out))?;

    if !response.ok() {
        return Err(SubmitError::Http(response.status()));
    }
    Ok(())
}
