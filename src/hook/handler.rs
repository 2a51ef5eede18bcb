//! The hook type and its fire pipeline.

use std::fmt;

use log::debug;
use ureq::{Agent, AgentBuilder, Request, Response};
use url::Url;

use crate::level::Level;
use crate::log_record::LogRecord;

use super::error::{CallbackError, HookError};
use super::serialise::serialise_payload;

/// Header identifying the service that produced the record.
const SERVICE_NAME_HEADER: &str = "service-name";
/// Highest response status treated as success. Only 200 (OK) and 201
/// (Created) pass; 204, redirects, and all error classes are failures.
const MAX_SUCCESS_STATUS: u16 = 201;

/// Callback run with the outbound request after the identity headers are set
/// and before transmission. May amend the request (requests are by-value
/// builders, so the callback returns the request it was given). Returning an
/// error aborts the send without touching the network.
pub type BeforeFn = Box<dyn Fn(Request) -> Result<Request, CallbackError> + Send + Sync>;

/// Callback run with the received response before status classification.
/// Returning an error surfaces immediately, bypassing classification.
pub type AfterFn = Box<dyn Fn(&Response) -> Result<(), CallbackError> + Send + Sync>;

/// Hook forwarding log records to an HTTP endpoint as JSON.
///
/// Construction performs no validation; a bad endpoint only fails once a
/// record is fired. The hook holds no per-call state, so one instance can
/// serve many records and many threads concurrently; requests share the
/// agent's connection pool.
pub struct HttpHook {
    agent: Agent,
    name: String,
    endpoint: String,
    levels: Vec<Level>,
    before_post: Option<BeforeFn>,
    after_post: Option<AfterFn>,
}

impl HttpHook {
    /// Create a hook named `name` (sent in the `service-name` header) that
    /// posts to `endpoint` and claims to handle `levels`.
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, levels: Vec<Level>) -> Self {
        Self {
            agent: AgentBuilder::new().build(),
            name: name.into(),
            endpoint: endpoint.into(),
            levels,
            before_post: None,
            after_post: None,
        }
    }

    /// Install a callback run against the outbound request before it is sent.
    pub fn with_before_post<F>(mut self, callback: F) -> Self
    where
        F: Fn(Request) -> Result<Request, CallbackError> + Send + Sync + 'static,
    {
        self.before_post = Some(Box::new(callback));
        self
    }

    /// Install a callback run against the response before status
    /// classification.
    pub fn with_after_post<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Response) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.after_post = Some(Box::new(callback));
        self
    }

    /// The levels this hook was configured to handle. Filtering on them is
    /// the host framework's job; `fire` never consults the set.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Ship one record to the configured endpoint.
    ///
    /// Serialises the record, POSTs it with the `service-name` and
    /// `content-type: application/json` headers, and runs the configured
    /// callbacks around the exchange. Each step short-circuits: a pre-send
    /// callback error means nothing reaches the network, and a post-send
    /// callback error takes precedence over status classification.
    ///
    /// # Errors
    ///
    /// Returns a [`HookError`] describing the first failing step. No step is
    /// retried.
    pub fn fire(&self, record: &LogRecord) -> Result<(), HookError> {
        let payload = serialise_payload(record).map_err(HookError::Marshal)?;
        let url = Url::parse(&self.endpoint).map_err(HookError::BuildRequest)?;

        let mut request = self
            .agent
            .request_url("POST", &url)
            .set(SERVICE_NAME_HEADER, &self.name)
            .set("content-type", "application/json");

        if let Some(before) = &self.before_post {
            request = before(request).map_err(HookError::Callback)?;
        }

        // ureq reports error statuses (>= 400) as Error::Status; recover the
        // response so the post-send callback still sees it.
        let response = match request.send_string(&payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => {
                return Err(HookError::Transport(Box::new(err)));
            }
        };

        if let Some(after) = &self.after_post {
            after(&response).map_err(HookError::Callback)?;
        }

        let status = response.status();
        if status > MAX_SUCCESS_STATUS {
            return Err(HookError::BadStatus(status));
        }

        debug!(
            "posted log record to {} ({} bytes, status {status})",
            self.endpoint,
            payload.len(),
        );
        Ok(())
    }
}

impl fmt::Debug for HttpHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpHook")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("levels", &self.levels)
            .field("before_post", &self.before_post.is_some())
            .field("after_post", &self.after_post.is_some())
            .finish()
    }
}
