mod ast;
mod block;
mod emit;
mod error;
mod inline;
mod parser;

pub use ast::{BlockKind, Node, SpanKind, TextSpan};
pub use block::{classify, segment};
pub use emit::{render, render_sanitized};
pub use error::Error;
pub use inline::tokenize;
pub use parser::{extract_title, parse};
