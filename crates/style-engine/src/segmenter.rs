//! Punctuation-based sentence segmentation
//!
//! A sentence ends at a run of `.`, `!`, or `?` (plus any trailing closing
//! quotes) followed by whitespace or end of input. Trailing text without
//! end punctuation becomes a final sentence. This is a heuristic splitter,
//! not a linguistic one; abbreviations like "Dr." will occasionally split
//! early, which is acceptable for style checking.

use shared_types::Sentence;

fn is_end_punct(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

/// Split text into an ordered sequence of sentences.
///
/// Total over any input: empty or whitespace-only text yields an empty
/// vec. `start`/`end` are character offsets into `text`; sentence indices
/// are contiguous from zero.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences: Vec<Sentence> = Vec::new();

    let mut i = 0usize;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    let mut start = i;

    while i < chars.len() {
        if is_end_punct(chars[i]) {
            let mut end = i;
            while end + 1 < chars.len()
                && (is_end_punct(chars[end + 1]) || is_closing_quote(chars[end + 1]))
            {
                end += 1;
            }

            let boundary = end + 1 >= chars.len() || chars[end + 1].is_whitespace();
            if boundary {
                push_sentence(&mut sentences, &chars, start, end + 1);
                i = end + 1;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                start = i;
                continue;
            }

            // Punctuation embedded in a token ("3.14", "e.g.x"); keep going.
            i = end + 1;
            continue;
        }
        i += 1;
    }

    if start < chars.len() {
        push_sentence(&mut sentences, &chars, start, chars.len());
    }

    sentences
}

/// Append the span `[start, end)` as a sentence, collapsing interior line
/// breaks and whitespace runs. Spans that normalize to nothing are dropped.
fn push_sentence(sentences: &mut Vec<Sentence>, chars: &[char], start: usize, end: usize) {
    let mut content = String::with_capacity(end - start);
    let mut prev_was_space = false;

    for &c in &chars[start..end] {
        if c.is_whitespace() {
            if !prev_was_space {
                content.push(' ');
                prev_was_space = true;
            }
        } else {
            content.push(c);
            prev_was_space = false;
        }
    }

    let content = content.trim().to_string();
    if content.is_empty() {
        return;
    }

    sentences.push(Sentence {
        index: sentences.len(),
        start,
        end,
        text: content,
    });
}
