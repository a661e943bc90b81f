//! `.properties` theme sources
//!
//! The format is line oriented:
//! - One entry per logical line: `key=value`, `key: value` or `key value`
//! - Lines end with `\n`, `\r\n` or a lone `\r`
//! - Comments: lines starting with `#` or `!`
//! - A trailing backslash continues the value on the next line (leading
//!   whitespace of the continuation is dropped); at end of input it is
//!   dropped
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other escaped char is
//!   taken literally, so `\=` and `\:` can appear in keys. A `\u` high
//!   surrogate followed by a `\u` low surrogate decodes to one character;
//!   unpaired surrogates become U+FFFD
//!
//! Key conventions used by themes: keys starting with `@` define variables,
//! keys starting with `*.` are global overrides.

use crate::error::PropertiesError;
use rustc_hash::FxHashMap;

pub(crate) const VARIABLE_PREFIX: &str = "@";
pub(crate) const REFERENCE_PREFIX: &str = "@@";
pub(crate) const GLOBAL_PREFIX: &str = "*.";

/// Flat key → raw value table. Later inserts win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: FxHashMap<String, String>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one source
    pub fn parse(src: &str) -> Result<Self, PropertiesError> {
        let mut table = Self::new();
        for (line_no, text) in logical_lines(src) {
            let (key, value) = split_entry(&text);
            let key = unescape(key).map_err(|msg| PropertiesError::Syntax { line: line_no, msg })?;
            let value =
                unescape(value).map_err(|msg| PropertiesError::Syntax { line: line_no, msg })?;
            table.insert(key, value);
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Merge `other` over `self`; `other` wins on collisions
    pub fn merge(&mut self, other: PropertyTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key, for deterministic application
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = PropertyTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

pub(crate) fn is_variable_key(key: &str) -> bool {
    key.starts_with(VARIABLE_PREFIX)
}

pub(crate) fn is_global_key(key: &str) -> bool {
    key.starts_with(GLOBAL_PREFIX)
}

/// Join continuation lines and drop blanks/comments.
///
/// Yields `(first physical line number, logical line)`.
fn logical_lines(src: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    let mut lines = physical_lines(src).enumerate();
    std::iter::from_fn(move || loop {
        let (idx, raw) = lines.next()?;
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let line_no = idx + 1;
        let mut logical = String::with_capacity(line.len());
        let mut current = line;
        loop {
            if ends_with_continuation(current) {
                logical.push_str(&current[..current.len() - 1]);
                match lines.next() {
                    Some((_, next)) => current = next.trim_start(),
                    None => break,
                }
            } else {
                logical.push_str(current);
                break;
            }
        }
        return Some((line_no, logical));
    })
}

/// Split on `\r\n`, `\n` or `\r`
fn physical_lines(src: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(src);
    std::iter::from_fn(move || {
        let s = rest?;
        match s.find(['\r', '\n']) {
            Some(i) => {
                let skip = if s[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&s[i + skip..]);
                Some(&s[..i])
            }
            None => {
                rest = None;
                Some(s)
            }
        }
    })
}

/// Odd number of trailing backslashes
fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value
fn split_entry(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut key_end = bytes.len();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' | b':' | b' ' | b'\t' | b'\x0c' => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }
    let key_end = key_end.min(bytes.len());

    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t', '\x0c']);
    }
    (&line[..key_end], rest)
}

fn unescape(s: &str) -> Result<String, String> {
    if !s.contains('\\') {
        return Ok(s.to_string());
    }
    let mut out = String::with_capacity(s.len());
    let mut it = s.chars();
    while let Some(c) = it.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(n) = it.next() else {
            return Err("dangling escape".to_string());
        };
        match n {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0c'),
            'u' => {
                let unit = read_hex4(&mut it)?;
                let ch = match unit {
                    0xD800..=0xDBFF => {
                        let mut ahead = it.clone();
                        let low = (ahead.next() == Some('\\') && ahead.next() == Some('u'))
                            .then(|| read_hex4(&mut ahead).ok())
                            .flatten()
                            .filter(|low| (0xDC00..=0xDFFF).contains(low));
                        match low {
                            Some(low) => {
                                it = ahead;
                                char::decode_utf16([unit, low])
                                    .next()
                                    .and_then(Result::ok)
                                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                            }
                            None => char::REPLACEMENT_CHARACTER,
                        }
                    }
                    _ => char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER),
                };
                out.push(ch);
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Four hex digits of a `\u` escape as a UTF-16 code unit
fn read_hex4(it: &mut std::str::Chars<'_>) -> Result<u16, String> {
    let hex: String = it.by_ref().take(4).collect();
    (hex.len() == 4)
        .then(|| u16::from_str_radix(&hex, 16).ok())
        .flatten()
        .ok_or_else(|| format!("malformed \\u escape `\\u{hex}`"))
}
