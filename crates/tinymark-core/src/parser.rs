use crate::ast::{BlockKind, Node, SpanKind, TextSpan};
use crate::block::{classify, segment};
use crate::error::Error;
use crate::inline::tokenize;

/// Parses a whole document into its HTML node tree.
///
/// The root is a `div` parent with one child per block, in document order.
/// Parsing is all-or-nothing: the first malformed block fails the document.
pub fn parse(document: &str) -> Result<Node, Error> {
    let mut children = Vec::new();
    for block in segment(document) {
        children.push(build_block(&block)?);
    }
    Ok(Node::parent("div", children))
}

/// Returns the text of the first line that is a level-1 heading: exactly one
/// `#` followed by something other than another `#`.
pub fn extract_title(document: &str) -> Result<String, Error> {
    for line in document.lines() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if rest.is_empty() || rest.starts_with('#') {
            continue;
        }
        return Ok(rest.trim().to_string());
    }
    Err(Error::NoTitleFound)
}

fn build_block(block: &str) -> Result<Node, Error> {
    match classify(block) {
        BlockKind::Paragraph => Ok(Node::parent("p", tokenize_to_nodes(block)?)),
        BlockKind::Heading(level) => {
            let mut spans = tokenize(block)?;
            // The hash run lives in the first span only; later spans start
            // after a styling delimiter.
            if let Some(first) = spans.first_mut() {
                first.content = strip_heading_marker(&first.content);
            }
            Ok(Node::parent(&format!("h{level}"), into_nodes(spans)))
        }
        BlockKind::Code => {
            // The tokenizer is bypassed entirely; the whole block, fence
            // markers included, becomes one opaque code span.
            let span = TextSpan::new(block, SpanKind::Code);
            Ok(Node::parent("pre", vec![span_to_node(span)]))
        }
        BlockKind::Quote => {
            let mut spans = tokenize(block)?;
            for span in &mut spans {
                let stripped = span.content.replace('>', "");
                span.content = stripped.trim().to_string();
            }
            Ok(Node::parent("blockquote", into_nodes(spans)))
        }
        BlockKind::UnorderedList => Ok(Node::parent(
            "ul",
            list_items(block, strip_unordered_marker)?,
        )),
        BlockKind::OrderedList => {
            Ok(Node::parent("ol", list_items(block, strip_ordered_marker)?))
        }
    }
}

/// Builds one `li` parent per line, tokenizing each line independently with
/// its marker removed.
fn list_items(block: &str, strip: fn(&str) -> &str) -> Result<Vec<Node>, Error> {
    let mut items = Vec::new();
    for line in block.lines() {
        items.push(Node::parent("li", tokenize_to_nodes(strip(line))?));
    }
    Ok(items)
}

fn strip_unordered_marker(line: &str) -> &str {
    line.strip_prefix("- ").unwrap_or(line)
}

/// Drops the `N. ` marker regardless of digit width.
fn strip_ordered_marker(line: &str) -> &str {
    match line.find(". ") {
        Some(idx) => &line[idx + 2..],
        None => line,
    }
}

fn strip_heading_marker(text: &str) -> String {
    let rest = text.trim_start_matches('#');
    rest.strip_prefix(' ').unwrap_or(rest).to_string()
}

fn tokenize_to_nodes(text: &str) -> Result<Vec<Node>, Error> {
    Ok(into_nodes(tokenize(text)?))
}

fn into_nodes(spans: Vec<TextSpan>) -> Vec<Node> {
    spans.into_iter().map(span_to_node).collect()
}

fn span_to_node(span: TextSpan) -> Node {
    match span.kind {
        SpanKind::Plain => Node::leaf(None, span.content),
        SpanKind::Bold => Node::leaf(Some("b"), span.content),
        SpanKind::Italic => Node::leaf(Some("i"), span.content),
        SpanKind::Code => Node::leaf(Some("code"), span.content),
        SpanKind::Link { url } => {
            Node::leaf_with_attrs("a", span.content, vec![("href".to_string(), url)])
        }
        SpanKind::Image { url } => Node::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), url),
                ("alt".to_string(), span.content),
            ],
        ),
    }
}
