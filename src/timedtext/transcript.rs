//! Transcript decoding
//!
//! A transcript document is a flat list of `<text start=".." dur="..">` elements
//! under an arbitrary root. Each element becomes one [`CaptionLine`] with a
//! derived end time. Character data is kept exactly as sent.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{RelayError, Result};

/// One timed caption line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionLine {
    pub text: String,
    pub start: String,
    pub dur: String,
    /// `start + dur`, two fractional digits.
    pub end: String,
}

/// Caption lines in playback (document) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub lines: Vec<CaptionLine>,
}

/// A `text` element as found in the document, before time parsing.
#[derive(Debug)]
struct RawLine {
    start: Option<String>,
    dur: Option<String>,
    text: String,
}

/// Format the end time of a line starting at `start` and lasting `dur` seconds.
pub fn end_time(start: f64, dur: f64) -> String {
    format!("{:.2}", start + dur)
}

fn parse_seconds(field: &'static str, value: &str) -> Result<f64> {
    let invalid = |reason: String| RelayError::InvalidTime {
        field,
        value: value.to_string(),
        reason,
    };
    let seconds = value.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !seconds.is_finite() {
        return Err(invalid("value out of range".to_string()));
    }
    Ok(seconds)
}

fn attribute(e: &BytesStart, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name).map_err(quick_xml::Error::from)? {
        Some(attr) => {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

impl RawLine {
    fn from_start(e: &BytesStart) -> Result<Self> {
        Ok(Self {
            start: attribute(e, "start")?,
            dur: attribute(e, "dur")?,
            text: String::new(),
        })
    }

    fn into_caption_line(self) -> Result<CaptionLine> {
        let start = self.start.ok_or(RelayError::MissingAttribute {
            element: "text",
            attribute: "start",
        })?;
        let dur = self.dur.ok_or(RelayError::MissingAttribute {
            element: "text",
            attribute: "dur",
        })?;

        let end = end_time(parse_seconds("start", &start)?, parse_seconds("dur", &dur)?);

        Ok(CaptionLine {
            text: self.text,
            start,
            dur,
            end,
        })
    }
}

/// Collect the `text` children of the root element.
///
/// Only character data directly inside a `text` element is kept, verbatim.
/// Nested elements and their content are skipped.
fn read_lines(body: &str) -> Result<Vec<RawLine>> {
    let mut reader = Reader::from_str(body);
    let mut lines = Vec::new();
    let mut current: Option<RawLine> = None;
    // Root element is depth 1, its children depth 2.
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if depth == 1 {
                    seen_root = true;
                } else if depth == 2 && e.local_name().as_ref() == b"text" {
                    current = Some(RawLine::from_start(&e)?);
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    seen_root = true;
                    break;
                } else if depth == 1 && e.local_name().as_ref() == b"text" {
                    lines.push(RawLine::from_start(&e)?);
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(line) = current.take() {
                        lines.push(line);
                    }
                }
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Event::Text(e) if depth == 2 => {
                if let Some(line) = current.as_mut() {
                    line.text
                        .push_str(&e.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(e) if depth == 2 => {
                if let Some(line) = current.as_mut() {
                    line.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root || depth != 0 {
        return Err(RelayError::UnexpectedEof);
    }
    Ok(lines)
}

/// Decode a (newline-normalized) transcript document.
///
/// Fails as a whole if any line has a missing or non-numeric time attribute.
pub fn parse_transcript(body: &str) -> Result<Transcript> {
    let lines = read_lines(body)?
        .into_iter()
        .map(RawLine::into_caption_line)
        .collect::<Result<Vec<_>>>()?;
    Ok(Transcript { lines })
}
