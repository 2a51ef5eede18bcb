//! HTTP-based log shipping.
//!
//! This module defines [`HttpHook`], which serialises a
//! [`LogRecord`](crate::LogRecord) to JSON and POSTs it to a configured
//! endpoint, with optional pre-send and post-send callbacks wrapped around
//! the exchange.
//!
//! # Delivery semantics
//!
//! Each `fire` call is one self-contained POST: no queueing, batching, or
//! retries. A response status of 200 or 201 is success; everything else is
//! reported as [`HookError::BadStatus`]. Failures at any earlier step
//! (serialisation, endpoint parsing, a callback veto, transport) abort the
//! remaining pipeline and surface as the corresponding [`HookError`] variant.

mod error;
mod handler;
mod serialise;


pub use error::{CallbackError, HookError};
pub use handler::{AfterFn, BeforeFn, HttpHook};
