use std::panic;

use tinymark_core::{classify, parse, render, tokenize};

const CASES: usize = 200;
const MAX_LEN: usize = 512;
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \
\n\t#>*`_.![]()-";

const PLAIN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 .";

#[test]
fn parse_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x7f4a_2d91_13b4_55a1);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let result = panic::catch_unwind(|| {
            let _ = parse(&source);
        });
        if result.is_err() {
            return Err(format!("parse panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn classify_is_total_on_random_blocks() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x91d4_2f8e_c1a3_044f);
    for case in 0..CASES {
        let len = rng.gen_range(0, 64);
        let block = random_string(&mut rng, CHARSET, len);
        let result = panic::catch_unwind(|| classify(&block));
        if result.is_err() {
            return Err(format!("classify panicked for case {}: {:?}", case, block).into());
        }
    }
    Ok(())
}

#[test]
fn balanced_delimiters_concatenate_back() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x2c6e_8d17_a90b_3e5d);
    for case in 0..CASES {
        // Interleave plain stretches with well-formed styled chunks; the
        // spans' concatenated content must equal the text minus the markers.
        let mut text = String::new();
        let mut expected = String::new();
        let segments = rng.gen_range(1, 9);
        for _ in 0..segments {
            let len = rng.gen_range(1, 16);
            let chunk = random_string(&mut rng, PLAIN_CHARSET, len);
            let marker = match rng.gen_range(0, 4) {
                0 => "",
                1 => "**",
                2 => "_",
                _ => "`",
            };
            text.push_str(marker);
            text.push_str(&chunk);
            text.push_str(marker);
            expected.push_str(&chunk);
        }

        let spans = tokenize(&text)
            .map_err(|err| format!("tokenize failed for case {}: {:?}: {}", case, text, err))?;
        let joined: String = spans.iter().map(|span| span.content.as_str()).collect();
        if joined != expected {
            return Err(format!(
                "concatenation mismatch for case {}: {:?} -> {:?}, expected {:?}",
                case, text, joined, expected
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn odd_delimiter_counts_always_fail() {
    for delimiter in ["**", "_", "`"] {
        let text = format!("before {}after", delimiter);
        assert!(
            tokenize(&text).is_err(),
            "expected {:?} to fail tokenizing",
            text
        );
    }
}

#[test]
fn rendered_documents_contain_no_stray_delimiters() -> Result<(), Box<dyn std::error::Error>> {
    let snippets = [
        "# A **big** title",
        "plain paragraph text",
        "styled with _italic_ and `code` runs",
        "- alpha\n- beta",
        "1. one\n2. two",
        "> a quoted line",
    ];

    let mut rng = Lcg::new(0x5b1f_77aa_0e42_9c03);
    for case in 0..CASES {
        let count = rng.gen_range(1, snippets.len() + 1);
        let mut blocks = Vec::new();
        for _ in 0..count {
            blocks.push(snippets[rng.gen_range(0, snippets.len())]);
        }
        let document = blocks.join("\n\n");
        let html = render(&parse(&document)?)?;
        for marker in ["**", "_", "`"] {
            if html.contains(marker) {
                return Err(format!(
                    "marker {:?} leaked for case {}: {:?} -> {:?}",
                    marker, case, document, html
                )
                .into());
            }
        }
    }
    Ok(())
}

fn random_string(rng: &mut Lcg, charset: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, charset.len());
        let byte = charset.get(idx).copied().unwrap_or(b' ');
        out.push(byte as char);
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}
