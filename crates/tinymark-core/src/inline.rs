use crate::ast::{SpanKind, TextSpan};
use crate::error::Error;

/// Tokenizes a run of raw block text into typed inline spans.
///
/// Stages run in a fixed order, each stage re-splitting only spans still
/// tagged `Plain`: bold, italic, code, then image and link extraction.
/// Delimiters never nest; text inside an already-typed span is opaque.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, Error> {
    let spans = vec![TextSpan::new(text, SpanKind::Plain)];
    let spans = split_delimited(spans, "**", SpanKind::Bold)?;
    let spans = split_delimited(spans, "_", SpanKind::Italic)?;
    let spans = split_delimited(spans, "`", SpanKind::Code)?;
    let spans = extract_bracketed(spans, true);
    Ok(extract_bracketed(spans, false))
}

/// Partitions each `Plain` span on `delimiter` into alternating plain and
/// styled pieces. The first piece is plain. Empty pieces are dropped. An odd
/// occurrence count means an unterminated delimiter and fails the whole run.
fn split_delimited(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, Error> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain || !span.content.contains(delimiter) {
            out.push(span);
            continue;
        }
        if span.content.matches(delimiter).count() % 2 == 1 {
            return Err(Error::MalformedInline {
                delimiter,
                text: span.content,
            });
        }
        for (idx, piece) in span.content.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if idx % 2 == 1 {
                kind.clone()
            } else {
                SpanKind::Plain
            };
            out.push(TextSpan::new(piece, kind));
        }
    }
    Ok(out)
}

fn extract_bracketed(spans: Vec<TextSpan>, image: bool) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        scan_bracketed(&span.content, image, &mut out);
    }
    out
}

/// Scans `text` left to right for `[text](url)` patterns (`![alt](url)` when
/// `image` is set), pushing a plain span for each unmatched stretch and one
/// typed span per match. Link scanning skips `[` immediately preceded by `!`;
/// that pattern belongs to image extraction.
///
/// The dialect does not nest brackets, so the first `]` closes the bracket
/// text and the first `)` closes the url.
fn scan_bracketed(text: &str, image: bool, out: &mut Vec<TextSpan>) {
    let bytes = text.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let match_start = if image {
            if i == 0 || bytes[i - 1] != b'!' {
                i += 1;
                continue;
            }
            i - 1
        } else {
            if i > 0 && bytes[i - 1] == b'!' {
                i += 1;
                continue;
            }
            i
        };
        let Some(close) = find_byte(bytes, i + 1, b']') else {
            i += 1;
            continue;
        };
        if bytes.get(close + 1) != Some(&b'(') {
            i += 1;
            continue;
        }
        let Some(paren_close) = find_byte(bytes, close + 2, b')') else {
            i += 1;
            continue;
        };

        if match_start > plain_start {
            out.push(TextSpan::new(
                &text[plain_start..match_start],
                SpanKind::Plain,
            ));
        }
        let content = &text[i + 1..close];
        let url = text[close + 2..paren_close].to_string();
        let kind = if image {
            SpanKind::Image { url }
        } else {
            SpanKind::Link { url }
        };
        out.push(TextSpan::new(content, kind));

        plain_start = paren_close + 1;
        i = plain_start;
    }
    if plain_start < text.len() {
        out.push(TextSpan::new(&text[plain_start..], SpanKind::Plain));
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .iter()
        .skip(from)
        .position(|&byte| byte == needle)
        .map(|pos| from + pos)
}
