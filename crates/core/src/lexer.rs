use serde::Serialize;

/// A normalized word of the source. No lexical category is attached;
/// the validator classifies tokens by what it expects at each position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub line: u32,
}

impl Token {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Token {
            text: text.into(),
            line,
        }
    }

    pub fn is(&self, literal: &str) -> bool {
        self.text == literal
    }

    /// Pure-digit token: a numeric literal, or a line number at top level.
    pub fn is_numeric(&self) -> bool {
        is_numeric(&self.text)
    }
}

pub fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Surround every structural symbol with whitespace so it splits into its
/// own token.
///
/// `[ ] | . ,` and `:=` always stand alone. A `:` stands alone unless it ends
/// a word (`move:`), in which case it stays attached and only what follows
/// is split off. Whitespace is inserted only where none is adjacent, so
/// applying the transform to its own output changes nothing.
pub fn space_symbols(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len() + src.len() / 4);
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];
        let attached_colon = c == ':' && pos > 0 && is_word_char(chars[pos - 1]);
        let width = match c {
            '[' | ']' | '|' | '.' | ',' => 1,
            ':' if chars.get(pos + 1) == Some(&'=') => 2,
            ':' if !attached_colon => 1,
            _ => 0,
        };

        if width == 0 {
            out.push(c);
            pos += 1;
            if attached_colon && chars.get(pos).is_some_and(|n| !n.is_whitespace()) {
                out.push(' ');
            }
            continue;
        }

        if out.chars().last().is_some_and(|l| !l.is_whitespace()) {
            out.push(' ');
        }
        out.extend(&chars[pos..pos + width]);
        pos += width;
        if chars.get(pos).is_some_and(|n| !n.is_whitespace()) {
            out.push(' ');
        }
    }
    out
}

/// Split source text into the ordered token stream: symbols spaced, text
/// lowercased, split on whitespace. Each token remembers its 1-based line.
pub fn lex(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx as u32 + 1;
        let normalized = space_symbols(raw).to_lowercase();
        tokens.extend(
            normalized
                .split_whitespace()
                .map(|word| Token::new(word, line)),
        );
    }
    tokens
}
