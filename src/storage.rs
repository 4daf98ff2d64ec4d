use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use bytes::Bytes;

/// In-memory keyspace the sample command handlers write to.
///
/// Keys are binary safe, like values.
#[derive(Debug, PartialEq, Default)]
pub struct Storage {
    data: HashMap<Bytes, StoredValue>
}

impl Storage {
    pub fn set(&mut self, key: Bytes, value: Bytes, expires_in_ms: Option<u64>) -> Result<Option<StoredValue>, anyhow::Error> {
        Ok(self.data.insert(key, StoredValue::from(value, expires_in_ms)?))
    }

    /// Returns the value at `key`, treating an expired entry as missing.
    pub fn get(&self, key: &[u8]) -> Result<Option<Bytes>, anyhow::Error> {
        let value = match self.data.get(key) {
            Some(stored_value) => {
                if stored_value.has_expired(current_time_ms()?) {
                    None
                } else {
                    Some(stored_value.value.clone())
                }
            },
            None => None
        };
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, PartialEq)]
pub struct StoredValue {
    expires_in_ms: Option<u64>,
    last_modified_timestamp: u128,
    value: Bytes
}

impl StoredValue {
    fn from(value: Bytes, expires_in_ms: Option<u64>) -> Result<StoredValue, anyhow::Error> {
        Ok(StoredValue {
            expires_in_ms,
            last_modified_timestamp: current_time_ms()?,
            value
        })
    }

    fn has_expired(&self, now_ms: u128) -> bool {
        match self.expires_in_ms {
            Some(expires_in_ms) => now_ms >= self.last_modified_timestamp + expires_in_ms as u128,
            None => false
        }
    }
}

fn current_time_ms() -> Result<u128, anyhow::Error> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())
}
