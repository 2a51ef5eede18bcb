//! HTTP log-shipping hook.
//!
//! This crate provides [`HttpHook`], a logging-framework plugin that forwards
//! structured log records to a remote endpoint as JSON over HTTP POST. The
//! host framework decides *when* to ship (typically by matching a record's
//! severity against [`HttpHook::levels`]); the hook performs exactly one
//! blocking POST per [`HttpHook::fire`] call and reports the outcome as a
//! [`HookError`] on failure.
//!
//! Two optional callbacks customise the exchange: a pre-send callback may
//! amend the outbound request (extra headers, auth) and a post-send callback
//! may inspect the response before status classification. Either callback can
//! veto the exchange by returning an error, which is surfaced to the caller
//! unwrapped.
//!
//! ```no_run
//! use httphook::{HttpHook, Level, LogRecord};
//!
//! let hook = HttpHook::new("billing", "https://logs.example.com/ingest", Level::ALL.to_vec());
//! let record = LogRecord::new("invoice issued").field("invoice_id", 4712);
//! hook.fire(&record)?;
//! # Ok::<(), httphook::HookError>(())
//! ```

mod hook;
mod level;
mod log_record;

pub use hook::{AfterFn, BeforeFn, CallbackError, HookError, HttpHook};
pub use level::Level;
pub use log_record::LogRecord;
