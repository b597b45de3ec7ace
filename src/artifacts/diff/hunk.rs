use crate::artifacts::diff::diff_block::{DiffBlock, Operation};
use crate::artifacts::tokens::token::Token;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkKind {
    Delete,
    Add,
    Change,
}

impl HunkKind {
    fn letter(&self) -> char {
        match self {
            HunkKind::Delete => 'd',
            HunkKind::Add => 'a',
            HunkKind::Change => 'c',
        }
    }
}

/// One ed-style change: a deleted run, an added run, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    kind: HunkKind,
    deleted: Vec<Token>,
    added: Vec<Token>,
}

impl Hunk {
    /// Builds hunks from every edit block of a script. A Delete directly
    /// followed by an Insert becomes a single change hunk.
    pub fn from_script(script: &[DiffBlock]) -> Vec<Hunk> {
        let mut hunks = Vec::new();
        let mut blocks = script.iter().filter(|b| !b.is_empty()).peekable();

        while let Some(block) = blocks.next() {
            match block.operation() {
                Operation::Equal => {}
                Operation::Insert => hunks.push(Hunk {
                    kind: HunkKind::Add,
                    deleted: Vec::new(),
                    added: block.tokens().to_vec(),
                }),
                Operation::Delete => {
                    let added = blocks
                        .next_if(|next| next.operation() == Operation::Insert)
                        .map(|next| next.tokens().to_vec());
                    hunks.push(match added {
                        Some(added) => Hunk {
                            kind: HunkKind::Change,
                            deleted: block.tokens().to_vec(),
                            added,
                        },
                        None => Hunk {
                            kind: HunkKind::Delete,
                            deleted: block.tokens().to_vec(),
                            added: Vec::new(),
                        },
                    });
                }
            }
        }

        hunks
    }

    pub fn kind(&self) -> HunkKind {
        self.kind
    }

    pub fn deleted(&self) -> &[Token] {
        &self.deleted
    }

    pub fn added(&self) -> &[Token] {
        &self.added
    }

    /// `L1,C1<op>L2,C2`, positioned on the deleted run when there is one.
    pub fn header(&self) -> String {
        let run = match self.kind {
            HunkKind::Add => &self.added,
            HunkKind::Delete | HunkKind::Change => &self.deleted,
        };
        let position = |token: Option<&Token>| {
            token.map_or((0, 0), |t| (t.line(), t.column()))
        };
        let (l1, c1) = position(run.first());
        let (l2, c2) = position(run.last());

        format!("{l1},{c1}{}{l2},{c2}", self.kind.letter())
    }

    pub fn deleted_lines(&self) -> Vec<String> {
        prefixed_lines("< ", &self.deleted)
    }

    pub fn added_lines(&self) -> Vec<String> {
        prefixed_lines("> ", &self.added)
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in self.deleted_lines() {
            writeln!(f, "{line}")?;
        }
        if self.kind == HunkKind::Change {
            writeln!(f, "---")?;
        }
        for line in self.added_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn prefixed_lines(prefix: &str, tokens: &[Token]) -> Vec<String> {
    let text: String = tokens.iter().map(Token::text).collect();
    text.lines().map(|line| format!("{prefix}{line}")).collect()
}
