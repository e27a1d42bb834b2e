// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction.
//!
//! Turns raw documentation text (comment markers already stripped) into a
//! [`DocumentationRecord`]. Two dialects are understood:
//!
//! | Dialect | Trigger | Summary | Remarks |
//! |---------|---------|---------|---------|
//! | Tagged | text contains `<summary` or `<remarks` | first `<summary>` | first `<remarks>` |
//! | Plain | anything else | first paragraph | remaining paragraphs |
//!
//! Tagged text is wrapped in a synthetic `<doc>` root and read with
//! `quick-xml`. Any reader error, mismatched tag or unclosed element yields
//! an empty record. Extraction never fails.

use quick_xml::{Reader, events::Event};
use serde::{Deserialize, Serialize};

/// Short description and extended remarks of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentationRecord {
    /// Short description.
    pub summary: Option<String>,
    /// Extended remarks.
    pub remarks: Option<String>
}

impl DocumentationRecord {
    /// Neither field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.remarks.is_none()
    }
}

/// Extract a documentation record from raw text.
///
/// # Examples
///
/// ```
/// use declsynth::pipeline::docs::extract;
///
/// let record = extract("<summary>Primary colour.</summary>\n<remarks>Warm.</remarks>");
/// assert_eq!(record.summary.as_deref(), Some("Primary colour."));
/// assert_eq!(record.remarks.as_deref(), Some("Warm."));
///
/// let broken = extract("<summary>unterminated");
/// assert!(broken.is_empty());
/// ```
pub fn extract(raw: &str) -> DocumentationRecord {
    let text = raw.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    let text = text.trim();
    if text.is_empty() {
        return DocumentationRecord::default();
    }

    if text.contains("<summary") || text.contains("<remarks") {
        parse_tagged(text).unwrap_or_default()
    } else {
        parse_plain(text)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Remarks
}

struct Capture {
    section: Section,
    depth:   usize,
    text:    String
}

fn section_of(name: &[u8]) -> Option<Section> {
    match name {
        b"summary" => Some(Section::Summary),
        b"remarks" => Some(Section::Remarks),
        _ => None
    }
}

fn parse_tagged(text: &str) -> Option<DocumentationRecord> {
    let wrapped = format!("<doc>{text}</doc>");
    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().check_end_names = true;

    let mut record = DocumentationRecord::default();
    let mut capture: Option<Capture> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                depth += 1;
                if capture.is_none()
                    && let Some(section) = section_of(start.name().as_ref())
                    && slot(&mut record, section).is_none()
                {
                    capture = Some(Capture {
                        section,
                        depth,
                        text: String::new()
                    });
                }
            }
            Ok(Event::End(_)) => {
                if let Some(open) = capture.take_if(|c| c.depth == depth) {
                    let content = open.text.trim();
                    if !content.is_empty() {
                        *slot(&mut record, open.section) = Some(content.to_string());
                    }
                }
                depth = depth.checked_sub(1)?;
            }
            Ok(Event::Text(chunk)) => {
                let unescaped = chunk.unescape().ok()?;
                if let Some(open) = capture.as_mut() {
                    open.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(chunk)) => {
                if let Some(open) = capture.as_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&chunk.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return None
        }
    }

    (depth == 0 && capture.is_none()).then_some(record)
}

fn slot(record: &mut DocumentationRecord, section: Section) -> &mut Option<String> {
    match section {
        Section::Summary => &mut record.summary,
        Section::Remarks => &mut record.remarks
    }
}

fn parse_plain(text: &str) -> DocumentationRecord {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(|p| {
            p.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|p| !p.is_empty())
        .collect();

    let mut iter = paragraphs.into_iter();
    let summary = iter.next();
    let rest: Vec<String> = iter.collect();
    DocumentationRecord {
        summary,
        remarks: (!rest.is_empty()).then(|| rest.join("\n\n"))
    }
}
