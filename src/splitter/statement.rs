/// A single statement recovered from a module, with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Trimmed statement text, terminator and comments removed.
    pub text: String,
    /// 1-based line of the first non-whitespace character.
    pub line: usize,
}

impl Statement {
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    /// First line of the statement text, for compact listings.
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }
}

/// A construct still open when the input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    /// `/**` without a closing `*/`; the rest of the input was consumed.
    BlockComment { line: usize },
    /// Quote without its closing partner (quote-aware mode only).
    Quote { quote: char, line: usize },
}

impl Unterminated {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::BlockComment { line } | Self::Quote { line, .. } => *line,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::BlockComment { line } => {
                format!("unterminated block comment opened on line {line}")
            }
            Self::Quote { quote, line } => {
                format!("unterminated {quote} quote opened on line {line}")
            }
        }
    }
}

/// Result of splitting one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutput {
    pub statements: Vec<Statement>,
    pub unterminated: Option<Unterminated>,
}

impl SplitOutput {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statement texts only, in source order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.statements.iter().map(|s| s.text.clone()).collect()
    }

    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        self.statements.into_iter().map(|s| s.text).collect()
    }
}
