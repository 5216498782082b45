//! Query and document tokenizer.
//!
//! Splits text into upper-cased terms: numbers (`123`, `1.23`), identifiers
//! (`gl4`, `GL_INVALID_VALUE`) and single non-alphanumeric characters (`√`).

use super::model::TermFreq;

pub struct Lexer<'a> {
    content: &'a [char],
}

impl<'a> Lexer<'a> {
    pub fn new(content: &'a [char]) -> Self {
        Self { content }
    }

    fn chop(&mut self, n: usize) -> &'a [char] {
        let (token, rest) = self.content.split_at(n);
        self.content = rest;
        token
    }

    fn chop_while<P>(&mut self, mut predicate: P) -> &'a [char]
    where
        P: FnMut(&[char], usize) -> bool,
    {
        let mut n = 0;
        while n < self.content.len() && predicate(self.content, n) {
            n += 1;
        }
        self.chop(n)
    }

    fn trim_left(&mut self) {
        self.chop_while(|content, idx| content[idx].is_whitespace());
    }

    fn next_token(&mut self) -> Option<&'a [char]> {
        self.trim_left();

        let first = *self.content.first()?;

        if first.is_numeric() {
            return Some(self.chop_while(|content, idx| {
                let c = content[idx];
                c.is_numeric()
                    || (c == '.' && content.get(idx + 1).is_some_and(|next| next.is_numeric()))
            }));
        }

        if first.is_alphabetic() {
            return Some(self.chop_while(|content, idx| {
                let c = content[idx];
                c.is_alphanumeric() || c == '_'
            }));
        }

        Some(self.chop(1))
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
            .map(|token| token.iter().collect::<String>().to_ascii_uppercase())
    }
}

/// Tokenizes `text` into upper-cased terms, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    Lexer::new(&chars).collect()
}

/// Counts the terms of a document, skipping tokens made only of punctuation.
pub fn index_terms(text: &str) -> TermFreq {
    let mut tf = TermFreq::new();

    for term in tokenize(text) {
        if term.chars().all(|c| c.is_ascii_punctuation()) {
            continue;
        }
        *tf.entry(term).or_insert(0) += 1;
    }

    tf
}
