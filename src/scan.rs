//! Structural scanning over JSON-like text.
//!
//! Nothing here allocates. Positions are byte offsets; every delimiter the
//! scanner looks at is ASCII, so offsets always land on `char` boundaries.

/// Find the index of the delimiter closing the one at `start`.
///
/// Scans forward from `start + 1`, counting every `open` as one level deeper
/// and every `close` as one level shallower, and returns the index where the
/// depth drops back to zero. Quotes are not special: a delimiter inside a
/// string value still counts.
///
/// Returns `None` when `text[start]` is not `open` or the text ends before
/// the structure is closed.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::find_match;
///
/// let text = "{ \"a\": { \"b\": 1 } } tail";
/// assert_eq!(find_match(text, 0, b'{', b'}'), Some(18));
/// assert_eq!(find_match("[ [ ]", 0, b'[', b']'), None);
/// ```
pub fn find_match(text: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&open) {
        return None;
    }

    let mut depth = 1usize;
    for (offset, &b) in bytes[start + 1..].iter().enumerate() {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(start + 1 + offset);
            }
        }
    }
    None
}

/// Strip the outer braces from an object span.
///
/// A span with no closing brace (truncated input) yields everything after
/// the opening brace.
pub fn object_body(object: &str) -> &str {
    let trimmed = object.trim();
    let Some(inner) = trimmed.strip_prefix('{') else {
        return trimmed;
    };
    inner.strip_suffix('}').unwrap_or(inner)
}

/// Iterator over the `"key": value` pairs at depth 0 of an object body.
///
/// Nested objects and arrays are skipped whole with [`find_match`], so a
/// child's `"intensity"` can never be mistaken for its parent's. Values are
/// returned as trimmed raw text; string values keep their quotes.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    /// Iterate the fields of an object span (outer braces optional).
    pub fn new(object: &'a str) -> Self {
        Self {
            body: object_body(object),
            pos: 0,
        }
    }

    /// Skip a nested `{...}` or `[...]` starting at `i`.
    fn skip_nested(&self, i: usize) -> usize {
        let bytes = self.body.as_bytes();
        let close = if bytes[i] == b'{' { b'}' } else { b']' };
        find_match(self.body, i, bytes[i], close)
            .map(|end| end + 1)
            .unwrap_or(bytes.len())
    }

    /// Skip a quoted string starting at `i`. No escape handling.
    fn skip_string(&self, i: usize) -> usize {
        self.body.as_bytes()[i + 1..]
            .iter()
            .position(|&b| b == b'"')
            .map(|p| i + 1 + p + 1)
            .unwrap_or(self.body.len())
    }

    /// End of the value starting at `i`: the next depth-0 comma or the end.
    fn value_end(&self, mut i: usize) -> usize {
        let bytes = self.body.as_bytes();
        while i < bytes.len() {
            match bytes[i] {
                b',' => return i,
                b'"' => i = self.skip_string(i),
                b'{' | b'[' => i = self.skip_nested(i),
                _ => i += 1,
            }
        }
        bytes.len()
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let body = self.body;
        let bytes = body.as_bytes();

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'{' | b'[' => {
                    self.pos = self.skip_nested(self.pos);
                }
                b'"' => {
                    let key_start = self.pos + 1;
                    let Some(key_end) = body[key_start..].find('"').map(|p| key_start + p)
                    else {
                        // Unterminated key
                        self.pos = bytes.len();
                        return None;
                    };
                    let key = &body[key_start..key_end];
                    let after_key = key_end + 1;

                    let rest = &body[after_key..];
                    let ws = rest.len() - rest.trim_start().len();
                    let colon = after_key + ws;
                    if bytes.get(colon) != Some(&b':') {
                        // A bare string, not a key
                        self.pos = after_key;
                        continue;
                    }

                    let value_start = colon + 1;
                    let value_end = self.value_end(value_start);
                    self.pos = value_end + 1;
                    return Some((key, body[value_start..value_end].trim()));
                }
                _ => self.pos += 1,
            }
        }
        None
    }
}

/// Look up the first depth-0 field named `key` in an object span.
pub fn field<'a>(object: &'a str, key: &str) -> Option<&'a str> {
    Fields::new(object).find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// Unquote a string value: the text between the first two quotes.
pub fn string_value(value: &str) -> Option<&str> {
    let start = value.find('"')?;
    let rest = &value[start + 1..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Visit every top-level `{...}` span inside an array body, in order.
///
/// Stops at the first object whose brace is never closed.
pub fn objects(body: &str) -> Objects<'_> {
    Objects { body, pos: 0 }
}

/// Iterator returned by [`objects`].
#[derive(Clone, Debug)]
pub struct Objects<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Iterator for Objects<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let body = self.body;
        let start = self.pos + body.get(self.pos..)?.find('{')?;
        match find_match(body, start, b'{', b'}') {
            Some(end) => {
                self.pos = end + 1;
                Some(&body[start..=end])
            }
            None => {
                log::warn!("unterminated object at byte {}, stopping", start);
                self.pos = body.len();
                None
            }
        }
    }
}

/// Body of the array value `value` (text between `[` and its match).
///
/// An unterminated array yields everything after the opening bracket so the
/// objects that did close can still be read.
pub fn array_body(value: &str) -> Option<&str> {
    let start = value.find('[')?;
    match find_match(value, start, b'[', b']') {
        Some(end) => Some(&value[start + 1..end]),
        None => {
            log::warn!("unterminated array, reading what is closed");
            Some(&value[start + 1..])
        }
    }
}
