mod segmenter;
mod statement;

pub use segmenter::{SplitOptions, StatementSplitter, segment};
pub use statement::{SplitOutput, Statement, Unterminated};
