/// A block comment delimiter pair, e.g. `/*` … `*/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkers {
    pub start: &'static str,
    pub end: &'static str,
}

/// How one language marks its comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Single-line comment marker (`#`, `//`, `--`, ...).
    pub line: Option<&'static str>,
    /// Block comment pairs. Most languages have zero or one.
    pub blocks: &'static [BlockMarkers],
    /// Declaration prefixes after which a block opener is kept as a docstring.
    pub docstring_leaders: &'static [&'static str],
}

const C_BLOCK: &[BlockMarkers] = &[BlockMarkers {
    start: "/*",
    end: "*/",
}];

const C_LIKE: LanguageProfile = LanguageProfile {
    line: Some("//"),
    blocks: C_BLOCK,
    docstring_leaders: &[],
};

const PYTHON: LanguageProfile = LanguageProfile {
    line: Some("#"),
    blocks: &[
        BlockMarkers {
            start: "\"\"\"",
            end: "\"\"\"",
        },
        BlockMarkers {
            start: "'''",
            end: "'''",
        },
    ],
    docstring_leaders: &["def ", "async def ", "class "],
};

const SHELL: LanguageProfile = LanguageProfile {
    line: Some("#"),
    blocks: &[],
    docstring_leaders: &[],
};

const RUBY: LanguageProfile = LanguageProfile {
    line: Some("#"),
    blocks: &[BlockMarkers {
        start: "=begin",
        end: "=end",
    }],
    docstring_leaders: &[],
};

const HTML: LanguageProfile = LanguageProfile {
    line: None,
    blocks: &[BlockMarkers {
        start: "<!--",
        end: "-->",
    }],
    docstring_leaders: &[],
};

const CSS: LanguageProfile = LanguageProfile {
    line: None,
    blocks: C_BLOCK,
    docstring_leaders: &[],
};

const SQL: LanguageProfile = LanguageProfile {
    line: Some("--"),
    blocks: C_BLOCK,
    docstring_leaders: &[],
};

const LISP: LanguageProfile = LanguageProfile {
    line: Some(";"),
    blocks: &[],
    docstring_leaders: &[],
};

const LUA: LanguageProfile = LanguageProfile {
    line: Some("--"),
    blocks: &[BlockMarkers {
        start: "--[[",
        end: "]]",
    }],
    docstring_leaders: &[],
};

/// Every known extension (lower-case, no leading dot) and its profile.
pub static REGISTRY: &[(&str, LanguageProfile)] = &[
    ("py", PYTHON),
    ("sh", SHELL),
    ("rb", RUBY),
    ("c", C_LIKE),
    ("cpp", C_LIKE),
    ("js", C_LIKE),
    ("java", C_LIKE),
    ("html", HTML),
    ("css", CSS),
    ("sql", SQL),
    ("lisp", LISP),
    ("lua", LUA),
    ("go", C_LIKE),
    ("rs", C_LIKE),
];

/// Normalise an extension to the registry's key form: no leading dot, lower-case.
pub fn normalize_ext(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Look up the profile for `ext`. Accepts `py`, `.py` and `.PY` alike.
pub fn profile_for_ext(ext: &str) -> Option<&'static LanguageProfile> {
    let key = normalize_ext(ext);
    REGISTRY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| profile)
}

impl LanguageProfile {
    /// The block pair whose start marker occurs first in `line`, with its byte offset.
    pub(crate) fn find_block_start(&self, line: &str) -> Option<(usize, &'static BlockMarkers)> {
        let blocks: &'static [BlockMarkers] = self.blocks;
        blocks
            .iter()
            .filter_map(|pair| line.find(pair.start).map(|idx| (idx, pair)))
            .min_by_key(|(idx, _)| *idx)
    }

    /// One-line human summary, e.g. `line: //  block: /* */`.
    pub fn describe(&self) -> String {
        let line = self.line.unwrap_or("-");
        let blocks = if self.blocks.is_empty() {
            "-".to_string()
        } else {
            self.blocks
                .iter()
                .map(|b| format!("{} {}", b.start, b.end))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        format!("line: {line}  block: {blocks}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_dot_and_case() {
        assert_eq!(profile_for_ext(".py"), profile_for_ext("PY"));
        assert_eq!(profile_for_ext("rs").and_then(|p| p.line), Some("//"));
        assert!(profile_for_ext(".txt").is_none());
        assert!(profile_for_ext("").is_none());
    }

    #[test]
    fn registry_covers_fourteen_extensions() {
        assert_eq!(REGISTRY.len(), 14);
        assert!(profile_for_ext("html").unwrap().line.is_none());
        assert!(profile_for_ext("lisp").unwrap().blocks.is_empty());
    }

    #[test]
    fn find_block_start_picks_earliest_pair() {
        let py = profile_for_ext("py").unwrap();
        let (idx, pair) = py.find_block_start("x = '''a''' + \"\"\"b\"\"\"").unwrap();
        assert_eq!(idx, 4);
        assert_eq!(pair.start, "'''");
        assert!(py.find_block_start("x = 1").is_none());
    }
}
