use crate::ast::Node;
use crate::error::Error;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Serializes a node tree to an HTML fragment.
///
/// Leaf content is emitted verbatim; the dialect has no entity handling. Use
/// [`render_sanitized`] when the document comes from an untrusted source.
pub fn render(node: &Node) -> Result<String, Error> {
    let mut out = String::new();
    render_into(node, &mut out)?;
    Ok(out)
}

/// Renders the tree, then cleans the fragment against an allow-list of
/// exactly the tags and attributes the dialect can produce.
pub fn render_sanitized(node: &Node) -> Result<String, Error> {
    let raw = render(node)?;

    let tags: HashSet<&'static str> = [
        "a",
        "b",
        "blockquote",
        "code",
        "div",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "i",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());
    tag_attributes.insert("img", ["alt", "src"].iter().copied().collect());

    Ok(Builder::new()
        .tags(tags)
        .tag_attributes(tag_attributes)
        .clean(&raw)
        .to_string())
}

fn render_into(node: &Node, out: &mut String) -> Result<(), Error> {
    match node {
        Node::Leaf {
            tag,
            content,
            attrs,
        } => match tag {
            None => out.push_str(content),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attrs {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                out.push_str(content);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        },
        Node::Parent { tag, children } => {
            let tag = tag.as_deref().ok_or(Error::MissingTag)?;
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                render_into(child, out)?;
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
    Ok(())
}
