use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Where a pattern came from, for diagnostics headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOrigin {
    Inline,
    Stdin,
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPattern {
    pub text: String,
    pub origin: PatternOrigin,
}

impl LoadedPattern {
    /// Name shown above rendered diagnostics.
    pub fn path(&self) -> Option<&str> {
        match &self.origin {
            PatternOrigin::Inline => None,
            PatternOrigin::Stdin => Some("<stdin>"),
            PatternOrigin::File(path) => Some(path),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use positional FILE or -p/--pattern")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Inline text wins over a path. Files and stdin lose one trailing line break, which
/// editors and `echo` add but the pattern does not mean.
pub fn load_pattern(
    pattern_path: Option<&Path>,
    pattern_text: Option<&str>,
) -> Result<LoadedPattern, LoadError> {
    if let Some(text) = pattern_text {
        return Ok(LoadedPattern {
            text: text.to_owned(),
            origin: PatternOrigin::Inline,
        });
    }

    let Some(path) = pattern_path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(LoadedPattern {
            text: strip_line_break(buf),
            origin: PatternOrigin::Stdin,
        });
    }

    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: display.clone(),
        source,
    })?;
    Ok(LoadedPattern {
        text: strip_line_break(content),
        origin: PatternOrigin::File(display),
    })
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
