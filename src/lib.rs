//! Typed, bounds-checked access to the arguments of a decoded Redis-style command.
//!
//! A wire decoder hands over a command name and its raw byte-string arguments as a
//! [`request::Request`]. Handlers read positions as strings, integers, non-negative
//! integers or key/value maps; any short or malformed input becomes a
//! [`error::RequestError`] that converts into an `-ERR` [`reply::Reply`].

pub mod error;
pub mod request;
pub mod reply;
pub mod storage;
pub mod commands;

pub use error::RequestError;
pub use request::Request;
pub use reply::Reply;
