//! Line model: `LEVEL [@XREF@] TAG [VALUE]`.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GedError, Result};

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+(?:@([^@\s]*)@\s+)?(\S+)(?:\s(.*))?$")
        .expect("Invalid regex pattern")
});

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedLine {
    /// 1-based physical line number
    pub number: usize,
    pub level: u32,
    /// Record pointer, present on level-0 record lines (`0 @I1@ INDI`)
    pub xref: Option<String>,
    pub tag: String,
    /// Remainder of the line, trailing whitespace removed
    pub value: String,
}

impl GedLine {
    pub fn parse(number: usize, text: &str) -> Result<Self> {
        let caps = LINE_PATTERN.captures(text).ok_or_else(|| GedError::MalformedLine {
            line: number,
            reason: format!("expected `LEVEL [@ID@] TAG [VALUE]`, got {:?}", text),
        })?;

        let level = caps[1].parse::<u32>().map_err(|e| GedError::MalformedLine {
            line: number,
            reason: format!("invalid level {:?}: {}", &caps[1], e),
        })?;

        Ok(Self {
            number,
            level,
            xref: caps.get(2).map(|m| m.as_str().to_string()),
            tag: caps[3].to_string(),
            value: caps
                .get(4)
                .map(|m| m.as_str().trim_end().to_string())
                .unwrap_or_default(),
        })
    }

    /// Record id of a level-0 line, if it carries a non-empty one
    pub fn record_id(&self) -> Option<&str> {
        self.xref.as_deref().filter(|id| !id.is_empty())
    }

    /// Pointer embedded in the value of a cross-reference line
    pub fn pointer(&self) -> Option<&str> {
        extract_pointer(&self.value)
    }
}

/// Strip `@<ref>@ ...` down to `<ref>`.
pub fn extract_pointer(value: &str) -> Option<&str> {
    let rest = value.trim_start().strip_prefix('@')?;
    let end = rest.find('@')?;
    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}
