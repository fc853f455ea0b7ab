use std::io::BufRead;

use super::{SplitOutput, Statement, Unterminated};

const TERMINATOR: char = ';';

/// Options controlling how a module is segmented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Treat `'...'`, `"..."` and `` `...` `` as literals, so terminators and
    /// comment markers inside them are kept as text. Off by default: quotes
    /// are ordinary characters and `RETURN 'a;b'` splits in two.
    pub respect_quotes: bool,
}

impl SplitOptions {
    #[must_use]
    pub const fn with_respect_quotes(mut self, respect_quotes: bool) -> Self {
        self.respect_quotes = respect_quotes;
        self
    }
}

/// Line-comment layer. It sees the raw input first, so `//` is honoured
/// everywhere outside a quoted literal, including inside a `/** */` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePhase {
    Text,
    /// A `/` is held back until the next character decides what it starts.
    Slash,
    /// Inside `//`, up to and including the newline.
    Comment,
}

/// Block-comment and literal layer, fed with line comments already removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// A `/` is held back in case it opens `/**`.
    Slash,
    /// `/*` is held back; only a third `*` opens a block comment.
    SlashStar,
    BlockComment,
    BlockCommentStar,
    Quoted(char),
    QuotedEscape(char),
}

/// Single-pass scanner over module text.
///
/// Input may arrive in arbitrary chunks; all lookahead is carried in the
/// state, so `feed("a/")` followed by `feed("/b")` sees the `//`.
struct Segmenter {
    options: SplitOptions,
    line_phase: LinePhase,
    state: ScanState,
    line: usize,
    opened_at: usize,
    current: String,
    start_line: Option<usize>,
    statements: Vec<Statement>,
}

impl Segmenter {
    const fn new(options: SplitOptions) -> Self {
        Self {
            options,
            line_phase: LinePhase::Text,
            state: ScanState::Normal,
            line: 1,
            opened_at: 1,
            current: String::new(),
            start_line: None,
            statements: Vec::new(),
        }
    }

    fn feed(&mut self, chunk: &str) {
        for ch in chunk.chars() {
            self.step(ch);
            if ch == '\n' {
                self.line += 1;
            }
        }
    }

    fn step(&mut self, ch: char) {
        match self.line_phase {
            LinePhase::Text => {
                if ch == '/' && !self.in_literal() {
                    self.line_phase = LinePhase::Slash;
                } else {
                    self.scan(ch);
                }
            }
            LinePhase::Slash => {
                if ch == '/' {
                    self.line_phase = LinePhase::Comment;
                } else {
                    self.line_phase = LinePhase::Text;
                    self.scan('/');
                    self.scan(ch);
                }
            }
            LinePhase::Comment => {
                // The newline belongs to the comment and is dropped with it.
                if ch == '\n' {
                    self.line_phase = LinePhase::Text;
                }
            }
        }
    }

    const fn in_literal(&self) -> bool {
        matches!(self.state, ScanState::Quoted(_) | ScanState::QuotedEscape(_))
    }

    fn scan(&mut self, ch: char) {
        match self.state {
            ScanState::Normal => self.scan_normal(ch),
            ScanState::Slash => self.scan_slash(ch),
            ScanState::SlashStar => self.scan_slash_star(ch),
            ScanState::BlockComment => {
                if ch == '*' {
                    self.state = ScanState::BlockCommentStar;
                }
            }
            ScanState::BlockCommentStar => self.scan_block_comment_star(ch),
            ScanState::Quoted(quote) => self.scan_quoted(ch, quote),
            ScanState::QuotedEscape(quote) => {
                self.push(ch);
                self.state = ScanState::Quoted(quote);
            }
        }
    }

    fn scan_normal(&mut self, ch: char) {
        match ch {
            '/' => {
                self.state = ScanState::Slash;
                self.opened_at = self.line;
            }
            TERMINATOR => self.terminate(),
            '\'' | '"' | '`' if self.options.respect_quotes => {
                self.push(ch);
                self.state = ScanState::Quoted(ch);
                self.opened_at = self.line;
            }
            _ => self.push(ch),
        }
    }

    fn scan_slash(&mut self, ch: char) {
        if ch == '*' {
            self.state = ScanState::SlashStar;
            return;
        }

        self.state = ScanState::Normal;
        self.push('/');
        self.scan_normal(ch);
    }

    fn scan_slash_star(&mut self, ch: char) {
        if ch == '*' {
            self.state = ScanState::BlockComment;
            return;
        }

        // Plain `/*` is not a comment marker here.
        self.state = ScanState::Normal;
        self.push('/');
        self.push('*');
        self.scan_normal(ch);
    }

    fn scan_block_comment_star(&mut self, ch: char) {
        self.state = match ch {
            '/' => ScanState::Normal,
            '*' => ScanState::BlockCommentStar,
            _ => ScanState::BlockComment,
        };
    }

    fn scan_quoted(&mut self, ch: char, quote: char) {
        self.push(ch);
        if ch == quote {
            self.state = ScanState::Normal;
        } else if ch == '\\' && quote != '`' {
            self.state = ScanState::QuotedEscape(quote);
        }
    }

    fn push(&mut self, ch: char) {
        if self.start_line.is_none() && !ch.is_whitespace() {
            self.start_line = Some(self.line);
        }
        self.current.push(ch);
    }

    fn terminate(&mut self) {
        let text = self.current.trim();
        if !text.is_empty() {
            let line = self.start_line.unwrap_or(self.line);
            self.statements.push(Statement::new(text, line));
        }
        self.current.clear();
        self.start_line = None;
    }

    fn finish(mut self) -> SplitOutput {
        if self.line_phase == LinePhase::Slash {
            self.scan('/');
        }

        let unterminated = match self.state {
            ScanState::Normal => None,
            ScanState::Slash => {
                self.push('/');
                None
            }
            ScanState::SlashStar => {
                self.push('/');
                self.push('*');
                None
            }
            ScanState::BlockComment | ScanState::BlockCommentStar => {
                Some(Unterminated::BlockComment {
                    line: self.opened_at,
                })
            }
            ScanState::Quoted(quote) | ScanState::QuotedEscape(quote) => Some(Unterminated::Quote {
                quote,
                line: self.opened_at,
            }),
        };

        self.terminate();

        SplitOutput {
            statements: self.statements,
            unterminated,
        }
    }
}

/// Splits Cypher module text into statements.
///
/// Line comments (`//` through the end of the line) are removed first, then
/// block comments (`/**` through `*/`); the remainder is split on `;`, and
/// each piece is trimmed; empty pieces are dropped. A `*/` that sits inside a
/// line comment therefore does not close a block. A plain `/* ... */` is not
/// a comment and stays in the statement text.
///
/// A line comment on the last line needs no trailing newline. An unclosed
/// `/**` swallows the rest of the input and is reported in
/// [`SplitOutput::unterminated`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementSplitter {
    options: SplitOptions,
}

impl StatementSplitter {
    #[must_use]
    pub const fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> SplitOptions {
        self.options
    }

    #[must_use]
    pub fn split(&self, source: &str) -> SplitOutput {
        let mut segmenter = Segmenter::new(self.options);
        segmenter.feed(source);
        segmenter.finish()
    }

    /// Split a module from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is not valid UTF-8.
    pub fn split_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<SplitOutput> {
        let mut segmenter = Segmenter::new(self.options);
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            segmenter.feed(&buf);
        }

        Ok(segmenter.finish())
    }
}

/// Split `text` with default options and return the statement texts.
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    StatementSplitter::default().split(text).into_texts()
}

#[cfg(test)]
#[path = "segmenter_tests.rs"]
mod tests;
