use crate::areas::workspace::{InputFile, Workspace};
use crate::artifacts::diff::ndiff::{DiffOptions, DiffOutcome, Ndiff};
use crate::artifacts::tokens::lexer::Lexer;
use crate::error::NdiffResult;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

/// One comparison between a source and a target file, and where its output
/// goes.
pub struct Comparison {
    source: PathBuf,
    target: PathBuf,
    options: DiffOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    color: bool,
}

impl Comparison {
    pub fn new(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        options: DiffOptions,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Comparison {
            source: source.into(),
            target: target.into(),
            options,
            writer: RefCell::new(writer),
            workspace: Workspace,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub async fn load_inputs(&self) -> NdiffResult<(InputFile, InputFile)> {
        self.workspace.read_pair(&self.source, &self.target).await
    }

    /// Lexes both inputs with one shared symbol table and compares them.
    pub fn run(&self, source: &InputFile, target: &InputFile) -> NdiffResult<DiffOutcome> {
        let mut lexer = Lexer::new()?;
        let source_tokens = lexer.tokenize(source.content());
        let target_tokens = lexer.tokenize(target.content());

        Ndiff::from_options(&self.options).compare(&source_tokens, &target_tokens)
    }
}
