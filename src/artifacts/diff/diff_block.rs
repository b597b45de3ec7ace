use crate::artifacts::tokens::token::Token;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Delete,
    Insert,
    Equal,
}

impl Operation {
    pub fn is_edit(&self) -> bool {
        !matches!(self, Operation::Equal)
    }

    /// Whether tokens under this operation belong to the source stream.
    pub fn consumes_source(&self) -> bool {
        matches!(self, Operation::Delete | Operation::Equal)
    }

    /// Whether tokens under this operation belong to the target stream.
    pub fn consumes_target(&self) -> bool {
        matches!(self, Operation::Insert | Operation::Equal)
    }

    fn marker(&self) -> char {
        match self {
            Operation::Delete => '-',
            Operation::Insert => '+',
            Operation::Equal => ' ',
        }
    }
}

/// One tagged run of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffBlock {
    operation: Operation,
    tokens: Vec<Token>,
}

/// An ordered sequence of blocks that rebuilds both compared streams.
pub type EditScript = Vec<DiffBlock>;

impl DiffBlock {
    pub fn delete(tokens: impl Into<Vec<Token>>) -> Self {
        Self::new(Operation::Delete, tokens.into())
    }

    pub fn insert(tokens: impl Into<Vec<Token>>) -> Self {
        Self::new(Operation::Insert, tokens.into())
    }

    pub fn equal(tokens: impl Into<Vec<Token>>) -> Self {
        Self::new(Operation::Equal, tokens.into())
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_edit(&self) -> bool {
        self.operation.is_edit()
    }

    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }
}

impl Display for DiffBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operation.marker(), self.text())
    }
}

/// Delete and Equal tokens, in script order.
pub fn source_side(script: &[DiffBlock]) -> Vec<Token> {
    side(script, Operation::consumes_source)
}

/// Insert and Equal tokens, in script order.
pub fn target_side(script: &[DiffBlock]) -> Vec<Token> {
    side(script, Operation::consumes_target)
}

fn side(script: &[DiffBlock], keep: fn(&Operation) -> bool) -> Vec<Token> {
    script
        .iter()
        .filter(|block| keep(&block.operation))
        .flat_map(|block| block.tokens.iter().cloned())
        .collect()
}

/// Appends `block`, fusing it into the last block when both share an operation.
pub fn push_coalesced(script: &mut EditScript, block: DiffBlock) {
    if block.is_empty() {
        return;
    }
    match script.last_mut() {
        Some(last) if last.operation == block.operation => last.tokens.extend(block.tokens),
        _ => script.push(block),
    }
}
