/// PING command - tests server connectivity.
///
/// Syntax: PING [message]
/// Returns: +PONG, or the message as a bulk string when one is given

use std::sync::{Arc, Mutex};
use crate::reply::{self, Reply};
use crate::request::Request;
use crate::storage;
use super::RedisCommand;

/// PING command implementation.
pub struct Ping<'a> {
    pub request: &'a Request,
}

impl RedisCommand for Ping<'_> {
    fn execute(&self, _: &Arc<Mutex<storage::Storage>>) -> Result<Reply, anyhow::Error> {
        if self.request.has_argument(0) {
            Ok(reply::bulk_string(self.request.get_bytes(0)?))
        } else {
            Ok(reply::simple_string("PONG"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_ping_command() {
        let request = Request::new("PING", Vec::new());
        let cmd = Ping { request: &request };

        let storage = Arc::new(Mutex::new(storage::Storage::default()));
        let result = cmd.execute(&storage).unwrap();

        assert_eq!(result.serialize(), b"+PONG\r\n");
    }

    #[test]
    fn test_ping_command_with_message() {
        let request = Request::new("PING", vec![Bytes::from_static(b"hello")]);
        let cmd = Ping { request: &request };

        let storage = Arc::new(Mutex::new(storage::Storage::default()));
        let result = cmd.execute(&storage).unwrap();

        assert_eq!(result.serialize(), b"$5\r\nhello\r\n");
    }
}
