//! Best-effort delivery of one request to the controller
//!
//! The invoking process never waits for the controller. [`Detached`] re-runs
//! the current binary in delivery mode as a child process that is never
//! joined, so the caller can exit before the request even connects. The child
//! is started with [`DELIVER_FLAG`] in argv, picks the request up with
//! [`Request::from_env`] and sends it with [`post`]. The variables alone never
//! switch a process into delivery mode.

use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use vibe_notify_proto::CONTENT_TYPE_JSON;

/// Passed on the delivery child's command line
pub(crate) const DELIVER_FLAG: &str = "--deliver";
/// Set on the delivery child: target URL
pub(crate) const DELIVER_URL_ENV: &str = "VIBE_NOTIFY_DELIVER_URL";
/// Set on the delivery child: JSON body
pub(crate) const DELIVER_BODY_ENV: &str = "VIBE_NOTIFY_DELIVER_BODY";

/// Upper bound on how long a delivery child lives. The invoking process
/// never waits for it.
pub(crate) const DELIVERY_DEADLINE: Duration = Duration::from_secs(10);

/// A fully resolved `POST`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Request {
    pub url: String,
    pub body: String,
}

impl Request {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// The request handed to a delivery child by its parent. Only read once
    /// [`DELIVER_FLAG`] was seen on the command line.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(DELIVER_URL_ENV).ok()?;
        let body = std::env::var(DELIVER_BODY_ENV).unwrap_or_default();
        Some(Self::new(url, body))
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum DeliveryError {
    #[error("failed to start delivery process: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("invalid url: {0}")]
    Uri(#[from] hyper::http::uri::InvalidUri),
    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),
    #[error("request failed: {0}")]
    Client(#[from] hyper_util::client::legacy::Error),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Hands a request off for delivery. Implementations must not block on the
/// network and must swallow every failure.
pub(crate) trait Dispatch {
    fn dispatch(&self, request: Request);
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
    fn dispatch(&self, request: Request) {
        (**self).dispatch(request)
    }
}

/// Sends each request from a detached copy of the current executable
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Detached;

impl Dispatch for Detached {
    fn dispatch(&self, request: Request) {
        match spawn_delivery(&request) {
            Ok(pid) => tracing::debug!(url = %request.url, pid, "delivery handed off"),
            Err(e) => tracing::debug!(url = %request.url, "delivery not started: {e}"),
        }
    }
}

// the child is never waited on, it outlives this process
#[allow(clippy::zombie_processes)]
fn spawn_delivery(request: &Request) -> Result<u32, DeliveryError> {
    let exe = std::env::current_exe()?;
    let child = std::process::Command::new(exe)
        .arg(DELIVER_FLAG)
        .env(DELIVER_URL_ENV, &request.url)
        .env(DELIVER_BODY_ENV, &request.body)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()?;
    Ok(child.id())
}

/// Delivery-mode entry point: send `request` once and ignore the outcome
pub(crate) fn deliver_blocking(request: Request) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::debug!("failed to build runtime: {e}");
            return;
        }
    };

    match runtime.block_on(post(&request, DELIVERY_DEADLINE)) {
        Ok(status) => tracing::debug!(url = %request.url, %status, "delivered"),
        Err(e) => tracing::debug!(url = %request.url, "delivery failed: {e}"),
    }
}

/// `POST` the body as JSON over plain HTTP. The response body is never read.
pub(crate) async fn post(
    request: &Request,
    deadline: Duration,
) -> Result<hyper::StatusCode, DeliveryError> {
    let uri: hyper::Uri = request.url.parse()?;
    let req = hyper::Request::builder()
        .method(hyper::Method::POST)
        .uri(uri)
        .header(hyper::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(request.body.clone())))?;

    let client: Client<HttpConnector, Full<Bytes>> =
        Client::builder(TokioExecutor::new()).build_http();

    let response = tokio::time::timeout(deadline, client.request(req))
        .await
        .map_err(|_| DeliveryError::Timeout(deadline))??;

    Ok(response.status())
}
