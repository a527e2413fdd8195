use crate::ast::BlockKind;

/// Splits a document into its blocks on blank-line boundaries.
///
/// Whitespace-only segments are dropped and each retained block is trimmed.
/// This is the sole block boundary: a block never spans a blank line.
pub fn segment(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Assigns a structural kind to one block. Total: anything that matches no
/// other shape is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if block.is_empty() {
        return BlockKind::Paragraph;
    }
    if block.starts_with('#') {
        let level = block.chars().take_while(|&ch| ch == '#').count();
        return BlockKind::Heading(level as u8);
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }

    // The remaining kinds are all-lines predicates, evaluated in one pass.
    let mut quote = true;
    let mut unordered = true;
    let mut ordered = true;
    let mut expected = 1u64;
    for line in block.lines() {
        if !line.starts_with('>') {
            quote = false;
        }
        if !line.starts_with("- ") {
            unordered = false;
        }
        match ordered_item_number(line) {
            Some(number) if number == expected => expected += 1,
            _ => ordered = false,
        }
    }

    if quote {
        BlockKind::Quote
    } else if unordered {
        BlockKind::UnorderedList
    } else if ordered {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Returns the numeric prefix of an `N. item` line, or `None` if the line
/// does not have the digits-period-space shape.
fn ordered_item_number(line: &str) -> Option<u64> {
    let digits_end = line.find(|ch: char| !ch.is_ascii_digit())?;
    if digits_end == 0 || !line[digits_end..].starts_with(". ") {
        return None;
    }
    line[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{classify, segment};
    use crate::ast::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn segment_splits_on_blank_lines_and_trims() {
        let blocks = segment("# Title\n\nBody text\n\n\n\n- a\n- b\n");
        assert_eq!(blocks, vec!["# Title", "Body text", "- a\n- b"]);
    }

    #[test]
    fn segment_is_idempotent_on_a_single_block() {
        let blocks = segment("  some text\nover two lines  \n\nrest");
        assert_eq!(segment(&blocks[0]), vec![blocks[0].clone()]);
    }

    #[test]
    fn heading_level_counts_leading_hashes() {
        assert_eq!(classify("# one"), BlockKind::Heading(1));
        assert_eq!(classify("### three"), BlockKind::Heading(3));
        assert_eq!(classify("#no space"), BlockKind::Heading(1));
    }

    #[test]
    fn fenced_block_is_code() {
        assert_eq!(classify("```\nlet x = 1;\n```"), BlockKind::Code);
    }

    #[test]
    fn unterminated_fence_is_a_paragraph() {
        assert_eq!(classify("```\nlet x = 1;"), BlockKind::Paragraph);
    }

    #[test]
    fn every_line_quoted_is_a_quote() {
        assert_eq!(classify("> a\n> b"), BlockKind::Quote);
        assert_eq!(classify("> a\nb"), BlockKind::Paragraph);
    }

    #[test]
    fn dashed_lines_are_an_unordered_list() {
        assert_eq!(classify("- a\n- b"), BlockKind::UnorderedList);
        assert_eq!(classify("- a\n-b"), BlockKind::Paragraph);
    }

    #[test]
    fn sequential_numbers_are_an_ordered_list() {
        assert_eq!(classify("1. a\n2. b"), BlockKind::OrderedList);
    }

    #[test]
    fn number_gap_demotes_to_paragraph() {
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(classify("2. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn multi_digit_items_still_classify() {
        let block = (1..=12)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn short_lines_do_not_panic() {
        assert_eq!(classify("-\n- a"), BlockKind::Paragraph);
        assert_eq!(classify("1\n2"), BlockKind::Paragraph);
        assert_eq!(classify(">"), BlockKind::Quote);
        assert_eq!(classify("a"), BlockKind::Paragraph);
    }
}
