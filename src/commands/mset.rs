/// MSET command - sets several keys at once.
///
/// Syntax: MSET <key> <value> [<key> <value> ...]
/// Returns: +OK on success
///
/// A key given more than once ends up with its last value.

use std::sync::{Arc, Mutex};
use anyhow::anyhow;
use log::*;
use crate::reply::{self, Reply};
use crate::request::Request;
use crate::storage;
use super::RedisCommand;

/// MSET command implementation.
pub struct MSet<'a> {
    pub request: &'a Request,
}

impl RedisCommand for MSet<'_> {
    fn execute(&self, storage: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
        let values = self.request.get_map(0)?;

        debug!("MSET {} keys", values.len());

        let mut data = storage
            .lock()
            .map_err(|e| anyhow!("Failed to lock storage: {}", e))?;
        for (key, value) in values.into_iter() {
            data.set(key, value, None)?;
        }

        Ok(reply::ok())
    }

}
