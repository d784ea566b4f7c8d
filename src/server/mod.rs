//! Reference task service
//!
//! An in-memory implementation of the REST contract the client consumes,
//! served with `tiny_http`. It backs `tasklist serve` and the end-to-end
//! tests; production deployments point the client at their own service.
//!
//! Behaviour worth knowing when testing against it:
//! - ids are sequential decimal strings
//! - titles are trimmed and cut to [`MAX_TITLE_CHARS`] characters
//! - unknown ids answer `404`, malformed bodies and blank titles `400`
//! - `DELETE` answers `204` with an empty body

mod board;
mod error;
mod http;

pub use board::{MAX_TITLE_CHARS, TaskBoard};
pub use error::{ErrorBody, ServerError};
pub use http::{ServerHandle, TaskServer, handle_request};
