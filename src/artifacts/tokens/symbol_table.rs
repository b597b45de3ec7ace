use crate::artifacts::tokens::token::{FIRST_LITERAL_CODE, WHITESPACE_CODE};
use std::collections::HashMap;

/// Maps literal token text to equivalence codes.
///
/// A table lives as long as one comparison (or one batch that injects it), so
/// codes handed out for the source are reused verbatim for the target.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    codes: HashMap<String, u32>,
    next_code: u32,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
            next_code: FIRST_LITERAL_CODE,
        }
    }

    pub fn code_for(&mut self, text: &str) -> u32 {
        if let Some(&code) = self.codes.get(text) {
            return code;
        }

        let code = self.next_code;
        self.next_code += 1;
        self.codes.insert(text.to_string(), code);
        code
    }

    pub fn whitespace_code(&self) -> u32 {
        WHITESPACE_CODE
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_text_maps_to_identical_code() {
        let mut table = SymbolTable::new();

        let first = table.code_for("let");
        let second = table.code_for("x");
        let again = table.code_for("let");

        assert_eq!(first, again);
        assert_ne!(first, second);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn literal_codes_never_collide_with_whitespace() {
        let mut table = SymbolTable::new();

        assert_ne!(table.code_for(" "), table.whitespace_code());
    }
}
