//! Line scanner: skips the preamble, filters noise and classifies data lines.

use crate::dialect::RuleSet;
use crate::error::ParseError;
use crate::models::PathAttributes;

/// Classified data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    HeaderSeen {
        prefix: String,
        inline: Option<PathAttributes>,
    },
    DetailSeen {
        /// Prefix of the most recent header.
        prefix: String,
        attrs: PathAttributes,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Skipping,
    Active,
}

/// Lines with fewer spaces than this are never data.
const MIN_SPACES: usize = 2;

pub struct Scanner<'r> {
    rules: &'r RuleSet,
    state: ScanState,
    current_prefix: Option<String>,
    line_no: usize,
}

impl<'r> Scanner<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Scanner {
            rules,
            state: ScanState::Skipping,
            current_prefix: None,
            line_no: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn current_prefix(&self) -> Option<&str> {
        self.current_prefix.as_deref()
    }

    /// Number of lines fed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Feed the next raw line.
    ///
    /// A detail line before any header is a [`ParseError::OrphanDetail`].
    pub fn scan_line(&mut self, raw: &str) -> Result<Option<ScanEvent>, ParseError> {
        self.line_no += 1;
        let raw = raw.trim_end_matches(|c: char| c == '\r' || c == '\n');

        if raw.matches(' ').count() < MIN_SPACES || self.rules.is_ignored(raw) {
            log::trace!("line {}: filtered", self.line_no);
            return Ok(None);
        }
        if self.rules.is_start_marker(raw) {
            if self.state == ScanState::Skipping {
                log::info!(
                    "line {}: start of {} route data",
                    self.line_no,
                    self.rules.name
                );
            }
            self.state = ScanState::Active;
            return Ok(None);
        }
        if self.state == ScanState::Skipping {
            return Ok(None);
        }

        let line = raw.trim();
        if let Some(header) = self.rules.match_header(line) {
            log::trace!("line {}: header {}", self.line_no, header.prefix);
            self.current_prefix = Some(header.prefix.clone());
            return Ok(Some(ScanEvent::HeaderSeen {
                prefix: header.prefix,
                inline: header.inline,
            }));
        }
        if let Some(attrs) = self.rules.match_detail(line) {
            let prefix = self
                .current_prefix
                .clone()
                .ok_or_else(|| ParseError::OrphanDetail {
                    line_no: self.line_no,
                    line: line.to_string(),
                })?;
            log::trace!("line {}: detail for {}", self.line_no, prefix);
            return Ok(Some(ScanEvent::DetailSeen { prefix, attrs }));
        }

        log::debug!("line {}: no pattern matched '{}'", self.line_no, line);
        Ok(None)
    }
}
