use crate::profiles::{BlockMarkers, LanguageProfile, profile_for_ext};

/// Where the scanner is between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any block comment.
    Code,
    /// Inside a block comment opened on line `opened_at` (1-based).
    InBlock {
        markers: &'static BlockMarkers,
        opened_at: usize,
    },
}

/// A block comment still open when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unterminated {
    pub line: usize,
    pub marker: &'static str,
}

/// Result of one stripping pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Set when everything after an opening marker was dropped for lack of a closing one.
    pub unterminated: Option<Unterminated>,
}

/// Line-based comment stripper.
///
/// Each line is fed through [`Stripper::step`]; lines that end up blank once
/// their comment part is gone are dropped, every other line is kept. Markers
/// are found by plain substring search, so markers inside string literals are
/// treated as real comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripper {
    /// Keep a block opener that directly follows a declaration line
    /// (Python `def`/`class` docstrings).
    pub keep_docstrings: bool,
}

impl Stripper {
    pub fn new(keep_docstrings: bool) -> Self {
        Self { keep_docstrings }
    }

    /// Strip comments from `content` using the profile registered for `ext`.
    /// Unknown extensions pass through untouched.
    pub fn strip(&self, content: &str, ext: &str) -> Stripped {
        match profile_for_ext(ext) {
            Some(profile) => self.strip_with_profile(content, profile),
            None => Stripped {
                text: content.to_string(),
                unterminated: None,
            },
        }
    }

    pub fn strip_with_profile(&self, content: &str, profile: &LanguageProfile) -> Stripped {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        let mut state = ScanState::Code;

        for (idx, &line) in lines.iter().enumerate() {
            let prev = idx.checked_sub(1).map(|p| lines[p]);
            let (next, fragment) = self.step(profile, state, line, prev, idx + 1);
            state = next;
            if let Some(fragment) = fragment {
                kept.push(fragment);
            }
        }

        let unterminated = match state {
            ScanState::Code => None,
            ScanState::InBlock { markers, opened_at } => Some(Unterminated {
                line: opened_at,
                marker: markers.start,
            }),
        };

        Stripped {
            text: kept.join("\n"),
            unterminated,
        }
    }

    /// Advance the scanner over one line.
    ///
    /// Returns the next state and the part of `line` to keep, if any.
    /// `prev` is the previous input line, `line_no` is 1-based.
    pub fn step<'a>(
        &self,
        profile: &LanguageProfile,
        state: ScanState,
        line: &'a str,
        prev: Option<&str>,
        line_no: usize,
    ) -> (ScanState, Option<&'a str>) {
        match state {
            ScanState::Code => {
                if let Some((idx, markers)) = profile.find_block_start(line) {
                    if self.is_docstring(profile, prev) {
                        return (ScanState::Code, Some(line));
                    }
                    let next = ScanState::InBlock {
                        markers,
                        opened_at: line_no,
                    };
                    (next, non_blank(line[..idx].trim_end()))
                } else if let Some(marker) = profile.line
                    && let Some(idx) = line.find(marker)
                {
                    (ScanState::Code, non_blank(line[..idx].trim_end()))
                } else {
                    (ScanState::Code, Some(line))
                }
            }
            ScanState::InBlock { markers, .. } => match line.find(markers.end) {
                Some(idx) => {
                    let rest = &line[idx + markers.end.len()..];
                    // A second closer on the same line ends the kept segment.
                    let rest = match rest.find(markers.end) {
                        Some(end) => &rest[..end],
                        None => rest,
                    };
                    (ScanState::Code, non_blank(rest))
                }
                None => (state, None),
            },
        }
    }

    fn is_docstring(&self, profile: &LanguageProfile, prev: Option<&str>) -> bool {
        if !self.keep_docstrings || profile.docstring_leaders.is_empty() {
            return false;
        }
        match prev {
            Some(prev) => {
                let prev = prev.trim();
                profile
                    .docstring_leaders
                    .iter()
                    .any(|leader| prev.starts_with(leader))
            }
            None => false,
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Strip comments for a file with extension `ext` (`py`, `.rs`, ...),
/// with docstring preservation off.
pub fn strip_comments(content: &str, ext: &str) -> String {
    Stripper::default().strip(content, ext).text
}
