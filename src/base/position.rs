//! Legacy source positions and character-offset line indexing.

use std::fmt;
use std::path::{Path, PathBuf};

use text_size::TextSize;

/// Line number reported when a file could not be read or an offset fell
/// past the end of the file.
pub const POS_FAILED: i32 = -300;

/// A `(file, line, column)` triple as the legacy doclet API reports it.
///
/// Lines and columns are 1-based. A negative line carries a raw failure
/// code from the host (for example `-1` when no position is available).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    file: PathBuf,
    line: i32,
    column: i32,
}

impl SourcePosition {
    pub fn new(file: impl Into<PathBuf>, line: i32, column: i32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The position used when no compilation unit or no doc comment exists.
    pub fn unknown() -> Self {
        Self::new(".", -1, 0)
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn is_unknown(&self) -> bool {
        self.line == -1 && self.column == 0 && self.file == Path::new(".")
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column > 0 {
            write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

/// A 1-based line and column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Start offsets of every line in a text, counted in characters.
///
/// A line ends at `\n`, or at a `\r` that is not followed by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut chars = text.chars().peekable();
        let mut len = 0u32;
        while let Some(c) = chars.next() {
            len += 1;
            let ends_line = match c {
                '\n' => true,
                '\r' => chars.peek() != Some(&'\n'),
                _ => false,
            };
            if ends_line {
                line_starts.push(TextSize::new(len));
            }
        }
        Self {
            line_starts,
            len: TextSize::new(len),
        }
    }

    /// Map a character offset to its line and column. `None` past the end
    /// of text.
    pub fn line_col(&self, offset: TextSize) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        Some(LineCol {
            line: line as u32 + 1,
            col: u32::from(col) + 1,
        })
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
