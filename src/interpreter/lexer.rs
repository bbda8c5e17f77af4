use logos::Logos;

use crate::{error::ParseError, util::span::Span};

/// The kind of a lexical token.
///
/// The lexer itself is derived from these patterns. Function names are plain
/// tokens, so they win over the symbol pattern only when the whole identifier
/// is the function name: `sine` and `sin2` are symbols. A lone `v` is the root
/// operator; `v` followed by a letter starts a symbol.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of spaces, kept as a single space.
    #[regex(r" +")]
    Space,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    BracketOpen,
    /// `)`
    #[token(")")]
    BracketClose,
    /// `=`
    #[token("=")]
    Equal,
    /// Variable names such as `A` or `snake_case_69`.
    #[regex(r"[a-uw-zA-Z][a-zA-Z0-9_]*")]
    #[regex(r"v[a-zA-Z][a-zA-Z0-9_]*")]
    Symbol,
    /// Numeric literals such as `.420`, `1337.` or `69_420`.
    #[regex(r"[0-9][0-9_]*(\.[0-9]*)?")]
    #[regex(r"\.[0-9]*")]
    Number,
    /// `+`, `-`, `*`, `/`, `//`, `%`, `**` and the root operator `v`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("//")]
    #[token("%")]
    #[token("**")]
    #[token("v")]
    Operator,
    /// `sin`, `cos`, `tan`, `asin`, `acos` and `atan`.
    #[token("sin")]
    #[token("cos")]
    #[token("tan")]
    #[token("asin")]
    #[token("acos")]
    #[token("atan")]
    Function,
}

impl TokenKind {
    /// Whether a token of this kind completes an operand on its left side.
    ///
    /// A `-` right after an operand is a subtraction, anywhere else it is a
    /// sign.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Symbol | Self::BracketClose)
    }

    /// Whether a token of this kind still waits for an operand on its right
    /// side, so that a following space groups tightly.
    #[must_use]
    pub const fn binds_right(self) -> bool {
        matches!(self, Self::Operator | Self::Function)
    }
}

/// A classified, positioned piece of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The token text. Spaces are always a single `" "`.
    pub text:     String,
    /// Byte offset in the current token stream. Recomputed after every
    /// rewrite of the stream.
    pub position: usize,
    /// Where the token came from in the tokenized text. Never recomputed.
    pub origin:   Span,
}

impl Token {
    /// Creates a token found at `origin` in the source text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, origin: Span) -> Self {
        Self { kind,
               text: text.into(),
               position: origin.position,
               origin }
    }

    /// A `(` inserted by the preprocessor on behalf of the text at `origin`.
    #[must_use]
    pub fn bracket_open(origin: Span) -> Self {
        Self::new(TokenKind::BracketOpen, "(", origin)
    }

    /// A `)` inserted by the preprocessor on behalf of the text at `origin`.
    #[must_use]
    pub fn bracket_close(origin: Span) -> Self {
        Self::new(TokenKind::BracketClose, ")", origin)
    }

    /// Length of the token text in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.text.len()
    }
}

/// Scans `source` into tokens.
///
/// # Parameters
/// - `source`: One statement (or several, separated by `;`).
///
/// # Returns
/// The tokens in source order. Token positions and origins are byte offsets
/// into `source`.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for the first character that
/// starts no token.
///
/// # Example
/// ```
/// use spacecalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("sin  2v27").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Function,
///             TokenKind::Space,
///             TokenKind::Number,
///             TokenKind::Operator,
///             TokenKind::Number]);
///
/// assert!(tokenize("2 & 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let range = lexer.span();
        let Ok(kind) = kind else {
            let character = source.get(range.start..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::UnexpectedCharacter { character,
                                                         span: Span::new(range.start,
                                                                         character.len_utf8()) });
        };

        let origin = Span::new(range.start, range.len());
        let text = if kind == TokenKind::Space { " " } else { lexer.slice() };
        tokens.push(Token::new(kind, text, origin));
    }

    log::trace!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Recomputes stream positions as a running sum of token sizes.
///
/// # Parameters
/// - `tokens`: The stream to renumber.
/// - `start`: Position of the first token.
pub fn recalc_positions(tokens: &mut [Token], start: usize) {
    let mut next = start;
    for token in tokens {
        token.position = next;
        next += token.size();
    }
}

/// Concatenates the token texts, which is how a processed expression is
/// shown back to the user.
///
/// # Example
/// ```
/// use spacecalc::interpreter::lexer::{join_tokens, tokenize};
///
/// let tokens = tokenize("1 +   2").unwrap();
/// assert_eq!(join_tokens(&tokens), "1 + 2");
/// ```
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
