//! # Source Lines
//!
//! An in-memory view of a text file as an ordered list of lines.
//! Every line keeps its own terminator (`\n` or `\r\n`), so rendering the
//! sequence back gives the original bytes when nothing was edited.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Ordered lines of a source file, terminators included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    /// Splits `text` after every `\n`. The last line may lack a terminator.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Reads the whole file into memory.
    pub fn read(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Overwrites `path` with the rendered lines.
    ///
    /// This is a plain truncate-and-write: a crash midway leaves a partial file.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.render()).map_err(|source| AppError::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Concatenates all lines.
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the file had no content at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, terminator included.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterates over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Index of the first line matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.lines.iter().position(|l| predicate(l.as_str()))
    }

    /// Replaces the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = line.into();
    }

    /// Inserts a line before `index` (or appends when `index == len`).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    /// Replaces the single line at `index` with `replacement`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn splice<I, S>(&mut self, index: usize, replacement: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines
            .splice(index..=index, replacement.into_iter().map(Into::into));
    }
}
