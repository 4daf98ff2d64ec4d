/// Reply values produced by command handlers.
///
/// Only the reply side of RESP2 is covered here: handlers build a `Reply`,
/// and `serialize` turns it into the bytes written back to the client.

use bytes::Bytes;

use crate::error::RequestError;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Reply {
    SimpleString {
        value: String
    },
    Error {
        message: String
    },
    Integer {
        value: i64
    },
    BulkString {
        value: Option<Bytes>
    },
    Array {
        elements: Vec<Reply>
    }
}

pub fn ok() -> Reply {
    simple_string("OK")
}

pub fn simple_string(value: &str) -> Reply {
    Reply::SimpleString {
        value: value.to_owned()
    }
}

/// An error reply. The `ERR` prefix is added when serializing a `RequestError`,
/// not here.
pub fn error(message: &str) -> Reply {
    Reply::Error {
        message: message.to_owned()
    }
}

pub fn integer(value: i64) -> Reply {
    Reply::Integer {
        value
    }
}

pub fn bulk_string(value: Bytes) -> Reply {
    Reply::BulkString {
        value: Some(value)
    }
}

pub fn null_bulk_string() -> Reply {
    Reply::BulkString {
        value: None
    }
}

pub fn array(elements: Vec<Reply>) -> Reply {
    Reply::Array { elements }
}

impl From<RequestError> for Reply {
    fn from(error: RequestError) -> Reply {
        Reply::Error {
            message: format!("ERR {}", error)
        }
    }
}

impl Reply {

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut result: Vec<u8> = Vec::new();
        match self {
            Reply::SimpleString { value } => {
                result.push(b'+');
                result.extend(value.as_bytes());
                result.extend(b"\r\n");
            },
            Reply::Error { message } => {
                result.push(b'-');
                result.extend(message.as_bytes());
                result.extend(b"\r\n");
            },
            Reply::Integer { value } => {
                result.push(b':');
                result.extend(value.to_string().as_bytes());
                result.extend(b"\r\n");
            },
            Reply::BulkString { value } => {
                result.push(b'$');
                match value {
                    Some(value) => {
                        result.extend(value.len().to_string().as_bytes());
                        result.extend(b"\r\n");
                        result.extend(value.iter());
                    },
                    None => {
                        result.extend(b"-1");
                    }
                }
                result.extend(b"\r\n");
            },
            Reply::Array { elements } => {
                result.push(b'*');
                result.extend(elements.len().to_string().as_bytes());
                result.extend(b"\r\n");
                for element in elements.iter() {
                    result.extend(element.serialize());
                }
            }
        }
        result
    }
}
