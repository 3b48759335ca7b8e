//! Log sanitization for physiological readings.
//!
//! Readings are health data. This module redacts them from formatted log
//! output before it reaches the log sink:
//! - `key=value` pairs for any of the eight reading keys
//! - numeric vectors (feature rows)
//! - raw text echoed back by parse errors
//!
//! # Important: prefer not logging readings at all
//!
//! Sanitizing strings is a fallback. Call sites should avoid passing
//! readings to `info`-level events in the first place.
//!
//! # Performance
//!
//! Each call is capped at [`MAX_SANITIZE_BYTES`]; longer input is truncated
//! and marked.

use regex::{Regex, RegexSet};
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

use crate::domain::Field;

/// Maximum number of bytes sanitized per call.
pub const MAX_SANITIZE_BYTES: usize = 16 * 1024;

static READING_PATTERNS: OnceLock<ReadingPatterns> = OnceLock::new();

/// A compiled pattern with its replacement text.
struct ReadingPattern {
    regex: Regex,
    replacement: &'static str,
}

struct ReadingPatterns {
    set: RegexSet,
    patterns: Vec<ReadingPattern>,
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    let mut end = max_bytes.min(input.len());
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

fn get_patterns() -> &'static ReadingPatterns {
    READING_PATTERNS.get_or_init(|| {
        let keys = Field::ALL
            .iter()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join("|");

        let rules: Vec<(String, &'static str)> = vec![
            // snoring_range=50, heart_rate: "72"
            (
                format!(r#"\b({keys})\s*[:=]\s*"?[^\s,;"}}\]]+"?"#),
                "${1}=[REDACTED]",
            ),
            // Feature rows: [50.0, 16.0, ...]
            (
                r"\[\s*[-+]?[0-9.]+(?:[eE][-+]?[0-9]+)?(?:\s*,\s*[-+]?[0-9.]+(?:[eE][-+]?[0-9]+)?)+\s*\]"
                    .to_string(),
                "[REDACTED-FEATURES]",
            ),
            // Raw text quoted by parse errors.
            (
                r"(could not convert string to float: )'[^']*'".to_string(),
                "${1}'[REDACTED]'",
            ),
        ];

        let set = RegexSet::new(rules.iter().map(|(p, _)| p.as_str())).expect("Valid regex set");
        let patterns = rules
            .into_iter()
            .map(|(pattern, replacement)| ReadingPattern {
                regex: Regex::new(&pattern).expect("Valid regex"),
                replacement,
            })
            .collect();

        ReadingPatterns { set, patterns }
    })
}

/// Redact reading values from a string.
#[must_use]
pub fn sanitize(input: &str) -> String {
    sanitize_with_limit(input, MAX_SANITIZE_BYTES)
}

fn sanitize_with_limit(input: &str, max_bytes: usize) -> String {
    let patterns = get_patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut result = prefix.to_string();
    for idx in patterns.set.matches(prefix).into_iter() {
        let pattern = &patterns.patterns[idx];
        result = pattern
            .regex
            .replace_all(&result, pattern.replacement)
            .into_owned();
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
    }
    result
}

/// Check whether a string appears to contain reading values.
#[must_use]
pub fn contains_readings(input: &str) -> bool {
    let (prefix, _truncated) = truncate_to_char_boundary(input, MAX_SANITIZE_BYTES);
    get_patterns().set.is_match(prefix)
}

/// A `tracing_subscriber` writer wrapper that sanitizes formatted log output
/// before it is written to the underlying sink.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

pub struct SanitizingWriter<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W> SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let sanitized = sanitize(&String::from_utf8_lossy(&line));
            self.inner.write_all(sanitized.as_bytes())?;
        }
        Ok(())
    }
}

impl<W> std::io::Write for SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // A single huge line with no newline is flushed as-is (truncated by sanitize).
        if self.buffer.len() > MAX_SANITIZE_BYTES * 2 {
            let sanitized = sanitize(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(sanitized.as_bytes())?;
            self.inner.write_all(b"\n")?;
            self.buffer.clear();
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;

        if !self.buffer.is_empty() {
            let sanitized = sanitize(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(sanitized.as_bytes())?;
            self.buffer.clear();
        }

        self.inner.flush()
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sanitize_key_value_readings() {
        let sanitized = sanitize("submit heart_rate=72 body_temp: \"98.6\" done");
        assert!(sanitized.contains("heart_rate=[REDACTED]"));
        assert!(sanitized.contains("body_temp=[REDACTED]"));
        assert!(!sanitized.contains("72"));
        assert!(!sanitized.contains("98.6"));
        assert!(sanitized.ends_with(" done"));
    }

    #[test]
    fn test_sanitize_feature_rows() {
        let sanitized = sanitize("features=[50.0, 16.0, 98.0, 10.0, 97.0, 50.0, 7.0, 72.0]");
        assert_eq!(sanitized, "features=[REDACTED-FEATURES]");
    }

    #[test]
    fn test_sanitize_parse_error_input() {
        let sanitized = sanitize("Error: could not convert string to float: 'abc' (Sleep Hours)");
        assert!(sanitized.contains("'[REDACTED]'"));
        assert!(!sanitized.contains("abc"));
    }

    #[test]
    fn test_contains_readings() {
        assert!(contains_readings("sleep_hours=7"));
        assert!(contains_readings("[1, 2]"));
        assert!(!contains_readings("Loaded model from \"models/svm_model.json\""));
    }

    #[test]
    fn test_leaves_plain_text_untouched() {
        let input = "Prediction complete: label=2";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_sanitize_truncates_large_inputs() {
        let input = "é".repeat(20);
        let sanitized = sanitize_with_limit(&input, 15);
        assert!(sanitized.ends_with(" [TRUNCATED]"));
    }

    #[test]
    fn test_writer_sanitizes_per_line() {
        let mut sink = Vec::new();
        {
            let mut writer = SanitizingWriter::new(&mut sink);
            writer.write_all(b"eye_movement=50\n").expect("write");
            writer.write_all(b"partial heart_rate=").expect("write");
            writer.write_all(b"80").expect("write");
            writer.flush().expect("flush");
        }
        let out = String::from_utf8(sink).expect("utf8");
        assert_eq!(out, "eye_movement=[REDACTED]\npartial heart_rate=[REDACTED]");
    }
}
