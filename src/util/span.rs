/// A byte range inside a statement, used to underline the offending text of
/// an error.
///
/// `position` is zero-based, `size` is the number of bytes covered. Errors
/// always carry a span of at least one byte so a caret can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first covered byte.
    pub position: usize,
    /// Number of covered bytes.
    pub size:     usize,
}

impl Span {
    #[must_use]
    pub const fn new(position: usize, size: usize) -> Self {
        Self { position, size }
    }

    /// A one byte span at `position`.
    #[must_use]
    pub const fn at(position: usize) -> Self {
        Self::new(position, 1)
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.size
    }

    /// The span covering `a` up to and including `b`.
    ///
    /// # Example
    /// ```
    /// use spacecalc::util::span::Span;
    ///
    /// let span = Span::across(Span::new(2, 1), Span::new(4, 3));
    /// assert_eq!(span, Span::new(2, 5));
    /// ```
    #[must_use]
    pub const fn across(a: Self, b: Self) -> Self {
        Self::new(a.position, b.end().saturating_sub(a.position))
    }

    /// The one byte span right after this one.
    #[must_use]
    pub const fn after(&self) -> Self {
        Self::at(self.end())
    }

    /// Moves the span right by `offset` bytes.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::new(self.position + offset, self.size)
    }

    /// Moves the span left by `offset` bytes, stopping at zero.
    #[must_use]
    pub const fn rebased(self, offset: usize) -> Self {
        Self::new(self.position.saturating_sub(offset), self.size)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.position, self.end())
    }
}
