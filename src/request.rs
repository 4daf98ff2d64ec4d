/// Typed access to the arguments of a decoded command.
///
/// A `Request` is built once per command after the wire decoder has split it
/// into discrete byte strings. Arguments stay raw until a handler asks for a
/// position, and every getter returns a `RequestError` instead of panicking on
/// short or malformed input.

use std::collections::HashMap;
use bytes::Bytes;
use log::*;

use crate::error::RequestError;

/// A command name together with its positional arguments.
///
/// The argument list never includes the command name, so index `0` is the
/// first argument after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    name: String,
    args: Vec<Bytes>,
}

impl Request {
    pub fn new(name: impl Into<String>, args: Vec<Bytes>) -> Request {
        Request {
            name: name.into(),
            args,
        }
    }

    /// Builds a request from a full decoded command line, name first.
    ///
    /// Returns `None` for an empty command line.
    pub fn from_parts<I, B>(parts: I) -> Option<Request>
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        let mut parts = parts.into_iter().map(Into::into);
        let name = decode_string(&parts.next()?);
        Some(Request::new(name, parts.collect()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arguments, not counting the command name.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn has_argument(&self, index: usize) -> bool {
        index < self.args.len()
    }

    /// Returns the argument at `index`, or `NotEnoughArguments` when the
    /// client did not send that many. All typed getters go through here.
    pub fn expect_argument(&self, index: usize) -> Result<&Bytes, RequestError> {
        self.args.get(index).ok_or_else(|| {
            self.rejected(index, RequestError::NotEnoughArguments)
        })
    }

    /// Returns the argument at `index` as text.
    ///
    /// Any byte sequence is accepted; invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn get_string(&self, index: usize) -> Result<String, RequestError> {
        let argument = self.expect_argument(index)?;
        Ok(decode_string(argument))
    }

    /// Returns the argument at `index` verbatim.
    pub fn get_bytes(&self, index: usize) -> Result<Bytes, RequestError> {
        self.expect_argument(index).cloned()
    }

    /// Parses the argument at `index` as a base-10 signed integer.
    ///
    /// The whole argument must be the number: no surrounding whitespace and
    /// no trailing characters.
    pub fn get_integer(&self, index: usize) -> Result<i64, RequestError> {
        let argument = self.expect_argument(index)?;
        std::str::from_utf8(argument)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| self.rejected(index, RequestError::ExpectedInteger))
    }

    /// Parses the argument at `index` as an integer that is zero or more.
    ///
    /// Counts, offsets and expirations use this; `0` is a valid value.
    pub fn get_non_negative_integer(&self, index: usize) -> Result<u64, RequestError> {
        let value = self.get_integer(index)?;
        u64::try_from(value)
            .map_err(|_| self.rejected(index, RequestError::ExpectedPositiveInteger))
    }

    /// Folds every argument from `index` to the end into a map, reading them
    /// as alternating keys and values.
    ///
    /// At least one pair is required. Keys are kept byte for byte, so keys that
    /// only differ in non-UTF-8 bytes stay distinct. A repeated key keeps the
    /// value of its last occurrence.
    pub fn get_map(&self, index: usize) -> Result<HashMap<Bytes, Bytes>, RequestError> {
        let count = self.args.len().saturating_sub(index);
        if count == 0 {
            return Err(self.rejected(index, RequestError::ExpectedKeyValPair));
        }
        if count % 2 != 0 {
            return Err(self.rejected(index, RequestError::UnevenKeyValPairs));
        }

        let mut values = HashMap::with_capacity(count / 2);
        for position in (index..self.args.len()).step_by(2) {
            let key = self.get_bytes(position)?;
            let value = self.get_bytes(position + 1)?;
            values.insert(key, value);
        }
        trace!("{} read {} key val pairs from index {}", self.name, values.len(), index);
        Ok(values)
    }

    fn rejected(&self, index: usize, error: RequestError) -> RequestError {
        debug!("{} rejected argument {}: {}", self.name, index, error);
        error
    }
}

fn decode_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, args: &[&str]) -> Request {
        Request::new(
            name,
            args.iter().map(|arg| Bytes::copy_from_slice(arg.as_bytes())).collect(),
        )
    }

    #[test]
    fn test_has_argument_bounds() {
        let req = request("SET", &["key1", "val1"]);
        assert!(req.has_argument(0));
        assert!(req.has_argument(1));
        assert!(!req.has_argument(2));
        assert!(!req.has_argument(usize::MAX));
    }

    #[test]
    fn test_has_argument_empty() {
        let req = request("PING", &[]);
        assert!(!req.has_argument(0));
        assert!(req.is_empty());
        assert_eq!(req.len(), 0);
    }

    #[test]
    fn test_expect_argument() {
        let req = request("GET", &["key"]);
        assert_eq!(req.expect_argument(0), Ok(&Bytes::from_static(b"key")));
        assert_eq!(req.expect_argument(1), Err(RequestError::NotEnoughArguments));
    }

    #[test]
    fn test_from_parts_splits_name() {
        let req = Request::from_parts(vec![b"SET".to_vec(), b"k".to_vec(), b"v".to_vec()]).unwrap();
        assert_eq!(req.name(), "SET");
        assert_eq!(req.len(), 2);
        assert_eq!(req.get_string(0).unwrap(), "k");
    }

    #[test]
    fn test_from_parts_empty() {
        let parts: Vec<Vec<u8>> = Vec::new();
        assert_eq!(Request::from_parts(parts), None);
    }

    #[test]
    fn test_get_string() {
        let req = request("SET", &["key1", "val1"]);
        assert_eq!(req.get_string(0), Ok("key1".to_string()));
        assert_eq!(req.get_string(1), Ok("val1".to_string()));
        assert_eq!(req.get_string(2), Err(RequestError::NotEnoughArguments));
    }

    #[test]
    fn test_get_string_accepts_any_bytes() {
        let req = Request::new("ECHO", vec![Bytes::new(), Bytes::from_static(&[0x66, 0xff, 0x6f])]);
        assert_eq!(req.get_string(0), Ok(String::new()));
        assert_eq!(req.get_string(1), Ok("f\u{FFFD}o".to_string()));
    }

    #[test]
    fn test_get_bytes_is_verbatim() {
        let payload = Bytes::from_static(&[0, 1, 2, 255]);
        let req = Request::new("SET", vec![Bytes::from_static(b"k"), payload.clone()]);
        assert_eq!(req.get_bytes(1), Ok(payload));
        assert_eq!(req.get_bytes(2), Err(RequestError::NotEnoughArguments));
    }

    #[test]
    fn test_get_integer() {
        for n in [0i64, 1, -1, 42, i64::MAX, i64::MIN] {
            let req = request("INCRBY", &["k", n.to_string().as_str()]);
            assert_eq!(req.get_integer(1), Ok(n));
        }

        let req = request("INCRBY", &["k", "+5", "-0"]);
        assert_eq!(req.get_integer(1), Ok(5));
        assert_eq!(req.get_integer(2), Ok(0));
    }

    #[test]
    fn test_get_integer_rejects_non_numeric() {
        for text in ["abc", "", " 1", "1 ", "1.5", "1e3", "12abc", "99999999999999999999"] {
            let req = request("INCRBY", &["k", text]);
            assert_eq!(req.get_integer(1), Err(RequestError::ExpectedInteger), "input {:?}", text);
        }
    }

    #[test]
    fn test_get_integer_rejects_invalid_utf8() {
        let req = Request::new("INCRBY", vec![Bytes::from_static(&[b'1', 0xff])]);
        assert_eq!(req.get_integer(0), Err(RequestError::ExpectedInteger));
    }

    #[test]
    fn test_get_integer_out_of_bounds() {
        let req = request("INCRBY", &["k"]);
        assert_eq!(req.get_integer(1), Err(RequestError::NotEnoughArguments));
    }

    #[test]
    fn test_get_non_negative_integer() {
        let req = request("EXPIRE", &["0", "15", "-1", "abc"]);
        assert_eq!(req.get_non_negative_integer(0), Ok(0));
        assert_eq!(req.get_non_negative_integer(1), Ok(15));
        assert_eq!(req.get_non_negative_integer(2), Err(RequestError::ExpectedPositiveInteger));
        assert_eq!(req.get_non_negative_integer(3), Err(RequestError::ExpectedInteger));
        assert_eq!(req.get_non_negative_integer(4), Err(RequestError::NotEnoughArguments));
    }

    #[test]
    fn test_get_map() {
        let req = request("MSET", &["k1", "v1", "k2", "v2"]);
        let map = req.get_map(0).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&b"k1"[..]], Bytes::from_static(b"v1"));
        assert_eq!(map[&b"k2"[..]], Bytes::from_static(b"v2"));
    }

    #[test]
    fn test_get_map_from_offset() {
        let req = request("HSET", &["hash", "field", "value"]);
        let map = req.get_map(1).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&b"field"[..]], Bytes::from_static(b"value"));
    }

    #[test]
    fn test_get_map_uneven() {
        let req = request("MSET", &["k1", "v1", "k2"]);
        assert_eq!(req.get_map(0), Err(RequestError::UnevenKeyValPairs));
    }

    #[test]
    fn test_get_map_no_pairs() {
        assert_eq!(request("MSET", &[]).get_map(0), Err(RequestError::ExpectedKeyValPair));

        let req = request("MSET", &["k1", "v1"]);
        assert_eq!(req.get_map(2), Err(RequestError::ExpectedKeyValPair));
        assert_eq!(req.get_map(5), Err(RequestError::ExpectedKeyValPair));
    }

    #[test]
    fn test_get_map_last_pair_wins() {
        let req = request("MSET", &["k", "v1", "k", "v2"]);
        let map = req.get_map(0).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&b"k"[..]], Bytes::from_static(b"v2"));
    }

    #[test]
    fn test_get_map_keeps_binary_keys_apart() {
        let req = Request::new("MSET", vec![
            Bytes::from_static(&[0xff]),
            Bytes::from_static(b"a"),
            Bytes::from_static(&[0xfe]),
            Bytes::from_static(b"b"),
        ]);
        let map = req.get_map(0).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&[0xffu8][..]], Bytes::from_static(b"a"));
        assert_eq!(map[&[0xfeu8][..]], Bytes::from_static(b"b"));
    }

    #[test]
    fn test_getters_are_repeatable() {
        let req = request("SET", &["key", "7", "k", "v"]);
        assert_eq!(req.get_string(0), req.get_string(0));
        assert_eq!(req.get_integer(1), req.get_integer(1));
        assert_eq!(req.get_map(2), req.get_map(2));
        assert_eq!(req.get_integer(9), req.get_integer(9));
    }
}
