use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub mod comments;
pub mod profiles;

use crate::comments::{Stripped, Stripper};
use crate::profiles::{REGISTRY, normalize_ext, profile_for_ext};

/// Configuration passed from the CLI layer (main.rs) into the core logic.
#[derive(Debug)]
pub struct Config {
    pub input: PathBuf,
    /// Overrides the extension taken from `input`.
    pub ext: Option<String>,
    pub keep_docstrings: bool,
    pub output: Option<PathBuf>,
    pub json: bool,
}

#[derive(serde::Serialize)]
struct FileEntry {
    path: String,
    file_name: String,
    language: Option<String>,
    content: String,
}

pub fn run_with_config(cfg: Config) -> Result<()> {
    if !cfg.input.exists() {
        bail!("File {} not found", cfg.input.display());
    }

    let display_path = normalize_for_display(&cfg.input);
    let ext = match &cfg.ext {
        Some(ext) => normalize_ext(ext),
        None => ext_of(&cfg.input),
    };

    let bytes = fs::read(&cfg.input).with_context(|| format!("Failed to read {}", display_path))?;

    // Unknown languages are copied byte for byte, so non-UTF-8 input survives.
    if profile_for_ext(&ext).is_none() && !cfg.json {
        return write_raw(&bytes, cfg.output.as_deref());
    }

    let text = String::from_utf8_lossy(&bytes);

    let stripped = Stripper::new(cfg.keep_docstrings).strip(&text, &ext);
    warn_unterminated(&display_path, &stripped);

    if let Some(out) = &cfg.output {
        fs::write(out, &stripped.text)
            .with_context(|| format!("Failed to write {}", out.display()))?;
    } else if cfg.json {
        print_file_json(&cfg.input, &display_path, &ext, stripped.text)?;
    } else {
        println!("{}", stripped.text);
    }

    Ok(())
}

fn write_raw(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(out) => {
            fs::write(out, bytes).with_context(|| format!("Failed to write {}", out.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

/// Print every registered extension with its comment markers.
pub fn print_languages() {
    for (ext, profile) in REGISTRY {
        println!("{:<6} {}", ext, profile.describe());
    }
}

/// Lower-case extension of `path` without the dot, or an empty string.
pub fn ext_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .map(normalize_ext)
        .unwrap_or_default()
}

// Unterminated blocks keep their legacy behaviour (everything after the
// opener is dropped) but no longer silently.
fn warn_unterminated(display_path: &str, stripped: &Stripped) {
    if let Some(open) = stripped.unterminated {
        eprintln!(
            "Warning: {}: unterminated `{}` comment opened on line {}; remaining lines were dropped",
            display_path, open.marker, open.line
        );
    }
}

fn print_file_json(path: &Path, display_path: &str, ext: &str, content: String) -> Result<()> {
    let entry = FileEntry {
        path: display_path.to_string(),
        file_name: path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        language: profile_for_ext(ext).map(|_| ext.to_string()),
        content,
    };

    let json = serde_json::to_string(&entry)?;
    println!("{}", json);

    Ok(())
}

/// Convert paths to a stable, slash-separated form for printing.
fn normalize_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn ext_of_is_lowercase_and_empty_without_extension() {
        assert_eq!(ext_of(Path::new("foo.PY")), "py");
        assert_eq!(ext_of(Path::new("dir/bar.tar.gz")), "gz");
        assert_eq!(ext_of(Path::new("Makefile")), "");
        assert_eq!(ext_of(Path::new(".bashrc")), "");
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        assert_eq!(normalize_for_display(Path::new("a\\b.rs")), "a/b.rs");
    }
}
