use thiserror::Error;

/// Everything that can go wrong while parsing or rendering a document.
///
/// All of these are terminal for the document being processed; there is no
/// partial-result mode.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A styling delimiter occurs an odd number of times in a run of text,
    /// so one of them is unterminated.
    #[error("no closing `{delimiter}` found in {text:?}")]
    MalformedInline {
        delimiter: &'static str,
        text: String,
    },
    /// The document contains no level-1 heading to use as a title.
    #[error("no level-1 heading found in document")]
    NoTitleFound,
    /// A parent node reached the renderer without a tag.
    #[error("parent node has no tag")]
    MissingTag,
}
