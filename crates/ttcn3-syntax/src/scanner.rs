//! Scanner for TTCN-3 source text.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when needed. Whitespace is dropped, comments and preprocessor
//! lines are kept as trivia tokens.
//!
//! ## Error handling
//!
//! The scanner never fails. Consecutive unrecognized characters are coalesced
//! into a single `Unknown` token, literals with an invalid shape become
//! `Malformed` and literals running into the end of input become
//! `Unterminated`.

use logos::{Lexer, Logos};
use rowan::{TextRange, TextSize};
use std::ops::Range;

use crate::kind::Kind;

/// Zero-copy token: kind + span, text retrieved via [`Token::text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: Kind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: Kind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// O(1) slice into source.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[Range::<usize>::from(self.span)]
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Pull-based scanner. Call [`Scanner::scan`] until it returns `Eof`.
pub struct Scanner<'s> {
    source: &'s str,
    lexer: Lexer<'s, Kind>,
    /// Token scanned while closing an `Unknown` run.
    pending: Option<Token>,
    /// Byte offsets of line starts; always starts with 0.
    lines: Vec<u32>,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            lexer: Kind::lexer(source),
            pending: None,
            lines: vec![0],
        }
    }

    /// Scans the whole source. Returns the tokens (without `Eof`) and the
    /// line table.
    pub fn lex(source: &str) -> (Vec<Token>, Vec<u32>) {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.scan();
            if token.kind == Kind::Eof {
                break;
            }
            tokens.push(token);
        }
        (tokens, scanner.lines)
    }

    pub fn scan(&mut self) -> Token {
        if let Some(token) = self.pending.take() {
            return token;
        }

        let mut error_start: Option<usize> = None;
        loop {
            match self.lexer.next() {
                Some(Ok(Kind::Whitespace)) => {
                    let span = self.lexer.span();
                    self.track_lines(span.clone());
                    if let Some(start) = error_start.take() {
                        return Token::new(Kind::Unknown, range_to_text_range(start..span.start));
                    }
                }
                Some(Ok(kind)) => {
                    let kind = self.lexer.extras.take().unwrap_or(kind);
                    let span = self.lexer.span();
                    self.track_lines(span.clone());
                    let token = Token::new(kind, range_to_text_range(span.clone()));
                    if let Some(start) = error_start.take() {
                        self.pending = Some(token);
                        return Token::new(Kind::Unknown, range_to_text_range(start..span.start));
                    }
                    return token;
                }
                Some(Err(())) => {
                    let span = self.lexer.span();
                    self.track_lines(span.clone());
                    error_start.get_or_insert(span.start);
                }
                None => {
                    let end = self.source.len();
                    if let Some(start) = error_start.take() {
                        return Token::new(Kind::Unknown, range_to_text_range(start..end));
                    }
                    let end = TextSize::from(end as u32);
                    return Token::new(Kind::Eof, TextRange::empty(end));
                }
            }
        }
    }

    /// Line starts seen so far.
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    fn track_lines(&mut self, span: Range<usize>) {
        let text = &self.source.as_bytes()[span.clone()];
        for (i, b) in text.iter().enumerate() {
            if matches!(b, b'\n' | b'\x0b' | b'\x0c') {
                self.lines.push((span.start + i + 1) as u32);
            }
        }
    }
}

// Logos callbacks. Each one extends the current token past its first
// character and may refine its kind through `extras`.

/// Integer and float literals, starting after the first digit.
pub(crate) fn number(lex: &mut Lexer<Kind>) -> bool {
    let leading_zero = lex.slice() == "0";
    let rest = lex.remainder().as_bytes();
    let at = |i: usize| rest.get(i).copied().unwrap_or(0);
    let mut kind = Kind::Integer;

    let mut i = digits(rest, 0);
    if leading_zero && i > 0 {
        kind = Kind::Malformed;
    }

    if at(i) == b'.' && at(i + 1).is_ascii_digit() {
        i = digits(rest, i + 1);
        if kind == Kind::Integer {
            kind = Kind::Float;
        }
    }

    if matches!(at(i), b'e' | b'E') {
        i += 1;
        if matches!(at(i), b'+' | b'-') {
            i += 1;
        }
        if at(i).is_ascii_digit() {
            i = digits(rest, i);
            if kind == Kind::Integer {
                kind = Kind::Float;
            }
        } else {
            kind = Kind::Malformed;
        }
    }

    if at(i).is_ascii_alphanumeric() || at(i) == b'_' {
        while at(i).is_ascii_alphanumeric() || at(i) == b'_' {
            i += 1;
        }
        kind = Kind::Malformed;
    }

    lex.bump(i);
    lex.extras = Some(kind);
    true
}

fn digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Double-quoted strings. `""` inside a string is an escaped quote, and so is
/// a backslash followed by any character.
pub(crate) fn string(lex: &mut Lexer<Kind>) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' if matches!(chars.peek(), Some((_, '"'))) => {
                chars.next();
            }
            '"' => {
                lex.bump(i + 1);
                return true;
            }
            '\\' => {
                chars.next();
            }
            _ => {}
        }
    }
    lex.bump(rest.len());
    lex.extras = Some(Kind::Unterminated);
    true
}

/// Bit, hex and octet strings: `'...'` followed by a radix suffix such as `B`,
/// `H` or `O`.
pub(crate) fn bitstring(lex: &mut Lexer<Kind>) -> bool {
    let rest = lex.remainder();
    let Some(close) = rest.find('\'') else {
        lex.bump(rest.len());
        lex.extras = Some(Kind::Unterminated);
        return true;
    };

    let suffix = &rest.as_bytes()[close + 1..];
    let len = suffix
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    if len == 0 || !suffix[0].is_ascii_alphabetic() {
        lex.extras = Some(Kind::Malformed);
    }
    lex.bump(close + 1 + len);
    true
}

/// Line comments and preprocessor lines, including the terminating newline.
pub(crate) fn line(lex: &mut Lexer<Kind>) -> bool {
    let rest = lex.remainder();
    let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
    lex.bump(len);
    true
}

pub(crate) fn block_comment(lex: &mut Lexer<Kind>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(i) => lex.bump(i + 2),
        None => {
            lex.bump(rest.len());
            lex.extras = Some(Kind::Unterminated);
        }
    }
    true
}
