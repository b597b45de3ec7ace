use crate::areas::comparison::Comparison;
use crate::artifacts::diff::hunk::{Hunk, HunkKind};
use crate::artifacts::tokens::token::Token;
use colored::Colorize;
use std::io::Write;

impl Comparison {
    pub async fn diff(&self) -> anyhow::Result<()> {
        let (source, target) = self.load_inputs().await?;
        let outcome = self.run(&source, &target)?;
        if !outcome.has_changes() {
            log::info!("no differences beyond whitespace");
            return Ok(());
        }

        let hunks = Hunk::from_script(&outcome.restored);
        for hunk in &hunks {
            self.print_hunk(hunk)?;
        }

        log::info!(
            "{} hunks, {} tokens deleted, {} tokens inserted",
            hunks.len(),
            count_words(hunks.iter().map(Hunk::deleted)),
            count_words(hunks.iter().map(Hunk::added))
        );

        Ok(())
    }

    fn print_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        let header = hunk.header();
        if self.color() {
            writeln!(self.writer(), "{}", header.cyan())?;
        } else {
            writeln!(self.writer(), "{header}")?;
        }

        for line in hunk.deleted_lines() {
            self.print_body_line(&line, HunkKind::Delete)?;
        }
        if hunk.kind() == HunkKind::Change {
            writeln!(self.writer(), "---")?;
        }
        for line in hunk.added_lines() {
            self.print_body_line(&line, HunkKind::Add)?;
        }

        Ok(())
    }

    fn print_body_line(&self, line: &str, side: HunkKind) -> anyhow::Result<()> {
        match (self.color(), side) {
            (false, _) => writeln!(self.writer(), "{line}")?,
            (true, HunkKind::Add) => writeln!(self.writer(), "{}", line.green())?,
            (true, _) => writeln!(self.writer(), "{}", line.red())?,
        }
        Ok(())
    }
}

fn count_words<'h>(runs: impl Iterator<Item = &'h [Token]>) -> usize {
    runs.flatten().filter(|token| !token.is_whitespace()).count()
}
