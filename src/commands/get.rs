/// GET command - returns the value of a key.
///
/// Syntax: GET <key>
/// Returns: The value at the key, or $-1\r\n if the key doesn't exist

use std::sync::{Arc, Mutex};
use anyhow::anyhow;
use log::*;
use crate::reply::{self, Reply};
use crate::request::Request;
use crate::storage;
use super::RedisCommand;

/// GET command implementation.
pub struct Get<'a> {
    pub request: &'a Request,
}

impl RedisCommand for Get<'_> {
    fn execute(&self, storage: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
        let key = self.request.get_bytes(0)?;

        debug!("GET {}", String::from_utf8_lossy(&key));

        let data = storage
            .lock()
            .map_err(|e| anyhow!("Failed to lock storage: {}", e))?;

        let reply = match data.get(&key)? {
            Some(value) => reply::bulk_string(value),
            None => reply::null_bulk_string(),
        };

        Ok(reply)
    }

}
