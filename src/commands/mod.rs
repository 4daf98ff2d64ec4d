/// Command handlers built on the request accessor.
///
/// Each handler reads its arguments through [`Request`](crate::request::Request)
/// getters in order and stops at the first `RequestError`. Choosing a handler
/// for a command name is left to the caller.

use std::sync::{Arc, Mutex};
use crate::error::RequestError;
use crate::reply::Reply;
use crate::storage;

pub mod echo;
pub mod ping;
pub mod set;
pub mod get;
pub mod mset;

// Re-export all command types for convenience
pub use echo::Echo;
pub use ping::Ping;
pub use set::Set;
pub use get::Get;
pub use mset::MSet;

/// Trait for implementing Redis commands.
pub trait RedisCommand {
    /// Execute the command and return the reply to send to the client.
    ///
    /// Argument errors come back as a `RequestError` inside the
    /// `anyhow::Error`; use [`run`] to turn them into an error reply.
    fn execute(&self, storage: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error>;
}

/// Executes `command`, converting a rejected argument into an `-ERR` reply.
///
/// Errors that are not about the request input (a poisoned storage lock, a
/// broken clock) are still returned as `Err`.
pub fn run(command: &dyn RedisCommand, storage: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
    match command.execute(storage) {
        Ok(reply) => Ok(reply),
        Err(error) => match error.downcast::<RequestError>() {
            Ok(request_error) => Ok(request_error.into()),
            Err(error) => Err(error),
        },
    }
}
