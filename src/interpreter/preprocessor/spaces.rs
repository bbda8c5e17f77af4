use crate::{
    interpreter::lexer::{Token, TokenKind},
    util::span::Span,
};

/// Rewrites a token stream so that spaces become explicit brackets.
///
/// The expander walks the input once and builds a fresh output stream. It
/// keeps the output index of every `(` it emitted, in increasing order, so
/// retroactive regrouping never scans the output backwards.
///
/// The rules, by the token before a space (`prev`) and the token after it
/// (`next`):
///
/// | `prev`              | `next`        | effect                      |
/// |---------------------|---------------|-----------------------------|
/// | none or `(`         | any           | dropped                     |
/// | operator / function | any           | brackets up to the boundary |
/// | operand             | operator      | left side regrouped         |
/// | operand             | anything else | dropped                     |
pub struct SpaceExpander<'a> {
    input:  &'a [Token],
    index:  usize,
    output: Vec<Token>,
    opens:  Vec<usize>,
}

impl<'a> SpaceExpander<'a> {
    /// Creates an expander over a stream without consecutive spaces.
    #[must_use]
    pub fn new(input: &'a [Token]) -> Self {
        let spaces = input.iter().filter(|t| t.kind == TokenKind::Space).count();
        Self { input,
               index: 0,
               output: Vec::with_capacity(input.len() + spaces * 2),
               opens: Vec::new() }
    }

    /// Consumes the expander and returns the space-free stream.
    ///
    /// # Example
    /// ```
    /// use spacecalc::interpreter::{
    ///     lexer::{join_tokens, tokenize},
    ///     preprocessor::spaces::SpaceExpander,
    /// };
    ///
    /// let tokens = tokenize("1+1 *2").unwrap();
    /// assert_eq!(join_tokens(&SpaceExpander::new(&tokens).expand()), "(1+1)*2");
    ///
    /// let tokens = tokenize("sin 4*2").unwrap();
    /// assert_eq!(join_tokens(&SpaceExpander::new(&tokens).expand()), "sin(4*2)");
    /// ```
    #[must_use]
    pub fn expand(mut self) -> Vec<Token> {
        while let Some(kind) = self.peek_kind() {
            if kind == TokenKind::Space {
                self.expand_space();
            } else {
                self.copy_next();
            }
        }
        self.output
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.input.get(self.index).map(|t| t.kind)
    }

    fn prev_kind(&self) -> Option<TokenKind> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.input.get(i))
            .map(|t| t.kind)
    }

    fn emit(&mut self, token: Token) {
        if token.kind == TokenKind::BracketOpen {
            self.opens.push(self.output.len());
        }
        self.output.push(token);
    }

    fn copy_next(&mut self) {
        let token = self.input[self.index].clone();
        self.index += 1;
        self.emit(token);
    }

    /// Applies the space rules to the space at the current index.
    fn expand_space(&mut self) {
        let prev = self.prev_kind();
        let space = self.input[self.index].origin;
        self.index += 1;

        match prev {
            None | Some(TokenKind::BracketOpen) => {},
            Some(kind) if kind.binds_right() => self.group_tight(space),
            Some(_) => {
                if self.peek_kind() == Some(TokenKind::Operator) {
                    self.regroup_left(space);
                }
            },
        }
    }

    /// Wraps everything up to the next boundary in brackets.
    ///
    /// Used after an operator or function followed by a space, so that
    /// `sin 4*2` becomes `sin(4*2)`. The scan stops before a space whose
    /// previous token is not an operator or function at bracket depth 0, or
    /// before a `)` that closes a bracket opened earlier. Spaces inside the
    /// group are expanded by the usual rules. A group that runs to the end of
    /// the input is closed one byte past its last token.
    fn group_tight(&mut self, space: Span) {
        self.emit(Token::bracket_open(space));

        let mut depth = 0usize;
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::BracketOpen => depth += 1,
                TokenKind::BracketClose => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                },
                TokenKind::Space => {
                    let binds = self.prev_kind().is_some_and(TokenKind::binds_right);
                    if depth == 0 && !binds {
                        break;
                    }
                    self.expand_space();
                    continue;
                },
                _ => {},
            }
            self.copy_next();
        }

        let close = match self.peek_kind() {
            Some(_) => space,
            None => self.input[..self.index].last().map_or(space, |t| t.origin.after()),
        };
        self.emit(Token::bracket_close(close));
    }

    /// Makes everything since the latest `(` the left operand of the next
    /// operator.
    ///
    /// A `)` is emitted and a matching `(` is inserted in front of the latest
    /// `(` already emitted, or at the start when there is none. This is what
    /// makes `1+1 *2` evaluate as `(1+1)*2`.
    fn regroup_left(&mut self, space: Span) {
        self.output.push(Token::bracket_close(space));

        let at = self.opens.last().copied().unwrap_or(0);
        self.output.insert(at, Token::bracket_open(space));

        // The inserted bracket sits at `at`, the one it displaced at `at + 1`.
        match self.opens.last_mut() {
            Some(last) => {
                *last = at;
                self.opens.push(at + 1);
            },
            None => self.opens.push(at),
        }
    }
}
