//! Document: the ordered line buffer and its render/highlight orchestration.
//!
//! The document owns every row exclusively. Each mutation re-renders the
//! touched row and re-runs the highlighter, then propagates forward while
//! the carried block-comment state keeps changing (the cascade). The cascade
//! is a plain loop bounded by the remaining document length, so arbitrarily
//! large files cannot exhaust the stack.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::highlight::highlight_line;
use crate::core::row::Row;
use crate::core::syntax::{self, SyntaxProfile};

/// An in-memory text file: index-contiguous rows plus the syntax profile
/// bound at load time.
pub struct Document {
    rows: Vec<Row>,
    profile: Option<SyntaxProfile>,
    filename: Option<PathBuf>,
    /// Counts mutations since load; zero means clean.
    dirty: u64,
}

impl Document {
    /// Create an empty document with no profile bound.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            profile: None,
            filename: None,
            dirty: 0,
        }
    }

    /// Open a file, selecting a syntax profile by its name.
    ///
    /// A file that does not exist yields an empty document, not an error.
    /// Each rendered line is echoed to stdout in load order.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        Self::load(path, syntax::profile_for(path))
    }

    /// Open a file with highlighting disabled regardless of its name.
    pub fn open_plain(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        Self::load(path.as_ref(), None)
    }

    fn load(
        path: &Path,
        profile: Option<SyntaxProfile>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut document = Self::new();
        document.profile = profile;
        document.filename = Some(path.to_path_buf());

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            // A missing file is a new, empty document.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(document),
            Err(e) => return Err(format!("failed to read {}: {}", path.display(), e).into()),
        };
        let text = String::from_utf8_lossy(&bytes);

        let mut lines = text.split('\n').peekable();
        let mut at = 0;
        while let Some(line) = lines.next() {
            // A trailing newline produces one final empty fragment, not a line.
            if lines.peek().is_none() && line.is_empty() {
                break;
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            document.insert_row(at, line.to_string())?;
            println!("{}", document.rows[at].render);
            at += 1;
        }

        document.dirty = 0;
        Ok(document)
    }

    /// Insert a line at position `at`, shifting later rows down.
    ///
    /// An out-of-range `at` is silently ignored (permissive by design).
    /// The new row is rendered and highlighted with the previous row's
    /// carried state, later rows are renumbered, and the cascade re-runs
    /// forward as far as the carried state keeps changing.
    pub fn insert_row(
        &mut self,
        at: usize,
        content: String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if at > self.rows.len() {
            return Ok(());
        }

        let row = Row::new(at, content)?;
        self.rows.insert(at, row);
        for row in &mut self.rows[at + 1..] {
            row.index += 1;
        }
        self.dirty += 1;
        self.rehighlight_from(at);
        Ok(())
    }

    /// Re-run the highlighter starting at `at`, cascading forward while the
    /// carried block-comment state of a row changes.
    fn rehighlight_from(&mut self, at: usize) {
        let mut idx = at;
        while idx < self.rows.len() {
            let carried_in = idx > 0 && self.rows[idx - 1].open_comment;
            let (tags, carried_out) =
                highlight_line(&self.rows[idx].render, self.profile.as_ref(), carried_in);

            let row = &mut self.rows[idx];
            let changed = row.open_comment != carried_out;
            row.hl = tags;
            row.open_comment = carried_out;

            idx += 1;
            if !changed {
                break;
            }
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, if in range.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// True if the document has been mutated since load.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// The syntax profile bound at load time, if any.
    pub fn profile(&self) -> Option<&SyntaxProfile> {
        self.profile.as_ref()
    }

    /// The filename for status display.
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "*scratch*".to_string())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
