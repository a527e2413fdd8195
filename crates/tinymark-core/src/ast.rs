/// A typed run of inline text within a block.
///
/// Spans are produced by the tokenizer and consumed exactly once when the
/// tree builder converts them into nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// The structural kind of one blank-line-delimited block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// One element of the output tree.
///
/// A `Leaf` with no tag renders as its raw content. A `Parent` must carry a
/// tag by render time; the builder always constructs tagged parents, but the
/// variant keeps the tag optional so hand-built trees surface
/// [`Error::MissingTag`](crate::Error::MissingTag) instead of emitting
/// malformed HTML.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        tag: Option<String>,
        content: String,
        // Insertion order is render order.
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn leaf(tag: Option<&str>, content: impl Into<String>) -> Self {
        Self::Leaf {
            tag: tag.map(str::to_string),
            content: content.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: &str,
        content: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            content: content.into(),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Self::Parent {
            tag: Some(tag.to_string()),
            children,
        }
    }
}
