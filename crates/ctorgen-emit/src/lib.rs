//! Structured source emission for ctorgen.
//!
//! Generated text must be byte-identical across runs for identical semantic
//! input: the incrementality cache and build reproducibility both depend on
//! it. [`SourceWriter`] is the only way the engine renders output, so
//! formatting decisions (indentation, newlines, block structure) live in one
//! place and braces stay balanced by construction.

/// One logical output unit, keyed by a deterministic, collision-safe name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedUnit {
    /// Deterministic unit key, e.g. `App.Outer.Widget_1.g.cs`.
    pub name: String,
    pub text: String,
}

/// Block-structured text builder with stable formatting.
///
/// Lines are indented four spaces per open block and terminated with `\n`.
/// [`SourceWriter::finish`] closes any blocks still open, so the rendered
/// text is balanced no matter how the caller bails out.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

const INDENT: &str = "    ";

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one indented line.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append an empty line (no indentation).
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Append a header line followed by an opening brace on its own line and
    /// increase the indentation.
    pub fn open_block(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    /// Close the innermost open block. Without one this is a no-op.
    pub fn close_block(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        self.line("}");
    }

    /// Finish rendering, closing any blocks still open.
    pub fn finish(mut self) -> String {
        while self.depth > 0 {
            self.close_block();
        }
        self.out
    }
}
