use bitflags::bitflags;
use derive_new::new;
use std::fmt;

/// Code shared by every whitespace run, regardless of its text.
pub const WHITESPACE_CODE: u32 = 0;

/// First code handed out to a literal by the symbol table.
pub const FIRST_LITERAL_CODE: u32 = 1;

bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        const START_OF_LINE = 0b001; // only whitespace precedes it on its line
        const LEADING_SPACE = 0b010; // the previous token is whitespace
        const WHITESPACE = 0b100;
    }
}

/// A lexed unit of text.
///
/// Two tokens are equal when their equivalence codes are equal; text and
/// position never take part in comparisons.
#[derive(Debug, Clone, new)]
pub struct Token {
    text: String,
    code: u32,
    offset: usize,
    line: usize,
    column: usize,
    #[new(default)]
    flags: TokenFlags,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    /// Index of this token in the lexed stream, whitespace included.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_whitespace(&self) -> bool {
        self.flags.contains(TokenFlags::WHITESPACE)
    }

    pub fn is_at_start_of_line(&self) -> bool {
        self.flags.contains(TokenFlags::START_OF_LINE)
    }

    pub fn has_leading_space(&self) -> bool {
        self.flags.contains(TokenFlags::LEADING_SPACE)
    }

    pub(crate) fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Equivalence codes of a token run, in order.
pub fn codes(tokens: &[Token]) -> Vec<u32> {
    tokens.iter().map(Token::code).collect()
}
