use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::error::{FlattenError, Result};

/// Textual matcher for local include directives. Searched anywhere in the
/// line, double-quoted form only; angle-bracket includes are plain text.
/// Deliberately unaware of comments and string literals.
const INCLUDE_PATTERN: &str = r#"#include\s+"(.+)""#;

/// Inlines a tree of header files into one self-contained output header.
///
/// Starting from a root header, every local `#include "..."` directive is
/// replaced by a commented echo of itself followed by the referenced file's
/// content, transitively, each file at most once in first-discovery
/// depth-first order. The whole body is wrapped in an include guard.
pub struct Flattener {
    base_dir: PathBuf,
    pattern: Regex,
}

/// Remaining lines of one opened header during traversal.
struct Frame {
    lines: std::vec::IntoIter<String>,
}

impl Flattener {
    /// Creates a flattener resolving include directives against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            pattern: Regex::new(INCLUDE_PATTERN).expect("valid regex"),
        }
    }

    /// Amalgamates the tree rooted at `root` into the file at `output`,
    /// creating or truncating it. The parent directory must already exist.
    #[instrument(
        level = "info",
        skip_all,
        fields(root = %root, guard = %guard, output = %output.display())
    )]
    pub fn flatten(&self, root: &str, guard: &str, output: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(output)?);
        self.flatten_to_writer(root, guard, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Same as [`Flattener::flatten`] but writes into an arbitrary sink.
    pub fn flatten_to_writer<W: Write>(&self, root: &str, guard: &str, out: &mut W) -> Result<()> {
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;

        let inlined = self.emit_body(root, out)?;
        info!(header_count = inlined, "header tree amalgamated");

        writeln!(out)?;
        writeln!(out, "#endif")?;
        Ok(())
    }

    /// Emits the flattened body and returns the number of headers inlined.
    ///
    /// The traversal keeps an explicit stack of partially consumed headers
    /// instead of recursing, so arbitrarily deep include chains cannot
    /// exhaust the call stack. A header is marked visited before it is read,
    /// which makes self-inclusion and mutual inclusion terminate.
    fn emit_body<W: Write>(&self, root: &str, out: &mut W) -> Result<usize> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();

        self.open_header(root, &mut visited, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            let Some(line) = frame.lines.next() else {
                stack.pop();
                continue;
            };

            if let Some(target) = self.match_include(&line) {
                writeln!(out, "// {line}")?;
                self.open_header(&target, &mut visited, &mut stack)?;
            } else {
                writeln!(out, "{line}")?;
            }
        }

        Ok(visited.len())
    }

    /// Resolves `include_path`, reads the header, and pushes its lines onto
    /// the traversal stack. A path already visited is skipped silently.
    fn open_header(
        &self,
        include_path: &str,
        visited: &mut HashSet<PathBuf>,
        stack: &mut Vec<Frame>,
    ) -> Result<()> {
        let resolved = self.base_dir.join(include_path);
        if visited.contains(&resolved) {
            debug!(path = %resolved.display(), "already inlined, skipping");
            return Ok(());
        }
        visited.insert(resolved.clone());

        let source = fs::read_to_string(&resolved).map_err(|source| FlattenError::Include {
            path: resolved,
            source,
        })?;
        let lines: Vec<String> = source.lines().map(str::to_owned).collect();
        stack.push(Frame {
            lines: lines.into_iter(),
        });
        Ok(())
    }

    /// Returns the referenced path when `line` is a local include directive.
    fn match_include(&self, line: &str) -> Option<String> {
        self.pattern
            .captures(line)
            .map(|captures| captures[1].to_string())
    }
}
