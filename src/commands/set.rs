/// SET command - sets a key to hold a value.
///
/// Syntax: SET <key> <value> [PX <milliseconds>]
/// Options:
///   PX: Set the specified expire time, in milliseconds
///
/// Returns: +OK on success

use std::sync::{Arc, Mutex};
use anyhow::anyhow;
use log::*;
use crate::reply::{self, Reply};
use crate::request::Request;
use crate::storage;
use super::RedisCommand;

/// SET command implementation.
pub struct Set<'a> {
    pub request: &'a Request,
}

impl RedisCommand for Set<'_> {
    fn execute(&self, storage: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
        let key = self.request.get_bytes(0)?;
        let value = self.request.get_bytes(1)?;

        let expires_in_ms = if self.request.has_argument(2) {
            let modifier = self.request.get_string(2)?;
            if !modifier.eq_ignore_ascii_case("px") {
                return Ok(reply::error("ERR syntax error"));
            }
            let expires_in_ms = self.request.get_non_negative_integer(3)?;
            if self.request.has_argument(4) {
                return Ok(reply::error("ERR syntax error"));
            }
            Some(expires_in_ms)
        } else {
            None
        };

        debug!("SET {} ({} bytes)", String::from_utf8_lossy(&key), value.len());
        debug!("expiration_after = {:?}", expires_in_ms);

        let mut data = storage
            .lock()
            .map_err(|e| anyhow!("Failed to lock storage: {}", e))?;
        data.set(key, value, expires_in_ms)?;

        Ok(reply::ok())
    }

}
