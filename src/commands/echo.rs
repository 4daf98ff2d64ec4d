/// ECHO command - echoes the argument back to the client.
///
/// Syntax: ECHO <message>
/// Returns: The message back to the client

use std::sync::{Arc, Mutex};
use crate::reply::{self, Reply};
use crate::request::Request;
use crate::storage;
use super::RedisCommand;

/// ECHO command implementation.
pub struct Echo<'a> {
    pub request: &'a Request,
}

impl RedisCommand for Echo<'_> {
    fn execute(&self, _: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
        Ok(reply::bulk_string(self.request.get_bytes(0)?))
    }
}
