//! Alignment through an external `diff` program
//!
//! Each token is written on its own line into a temporary file per side, and
//! the program's normal-format output (`2a3,4`, `5,6d4`, `7c8,9`) is read
//! back as line ranges. Lines outside every change command are unchanged.

use crate::artifacts::diff::diff_block::{DiffBlock, EditScript};
use crate::artifacts::diff::oracle::AlignmentOracle;
use crate::artifacts::tokens::token::Token;
use crate::error::{NdiffError, NdiffResult};
use derive_new::new;
use regex::Regex;
use std::io::Write;
use std::ops::Range;
use std::process::Command;
use tempfile::NamedTempFile;

const COMMAND_PATTERN: &str = r"^(\d+)(?:,(\d+))?([acd])(\d+)(?:,(\d+))?$";

#[derive(Debug, Clone, new)]
pub struct ExternalDiffOracle {
    program: String,
}

/// A change command converted to zero-based, half-open token ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCommand {
    pub source: Range<usize>,
    pub target: Range<usize>,
}

impl ExternalDiffOracle {
    fn write_tokens(tokens: &[Token]) -> NdiffResult<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        for token in tokens {
            writeln!(file, "{}", token.text())?;
        }
        file.flush()?;
        Ok(file)
    }

    fn run(&self, source: &[Token], target: &[Token]) -> NdiffResult<String> {
        let a = Self::write_tokens(source)?;
        let b = Self::write_tokens(target)?;

        let output = Command::new(&self.program)
            .arg("-a")
            .arg(a.path())
            .arg(b.path())
            .output()
            .map_err(|e| NdiffError::oracle_spawn(&self.program, e))?;

        // 0: no differences, 1: differences, anything else is trouble
        match output.status.code() {
            Some(0 | 1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            status => Err(NdiffError::oracle_malformed(format!(
                "`{}` exited with {:?}: {}",
                self.program,
                status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }
}

impl AlignmentOracle for ExternalDiffOracle {
    fn align(&self, source: &[Token], target: &[Token]) -> NdiffResult<EditScript> {
        let output = self.run(source, target)?;
        let commands = parse_normal_format(&output)?;
        log::debug!("`{}` reported {} change commands", self.program, commands.len());

        script_from_commands(&commands, source, target)
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Parses every change command line of normal-format diff output, skipping
/// the `<`, `>` and `---` body lines.
pub fn parse_normal_format(output: &str) -> NdiffResult<Vec<ChangeCommand>> {
    let pattern = Regex::new(COMMAND_PATTERN)?;
    let number = |text: &str| {
        text.parse::<usize>()
            .map_err(|e| NdiffError::oracle_malformed(format!("bad line number `{text}`: {e}")))
    };

    let mut commands = Vec::new();
    for line in output.lines() {
        if line.starts_with('<') || line.starts_with('>') || line == "---" || line.is_empty() {
            continue;
        }
        if line.starts_with('\\') {
            // "\ No newline at end of file"
            continue;
        }

        let captures = pattern
            .captures(line)
            .ok_or_else(|| NdiffError::oracle_malformed(format!("unexpected line `{line}`")))?;

        let n = number(&captures[1])?;
        let m = captures.get(2).map(|c| number(c.as_str())).transpose()?.unwrap_or(n);
        let k = number(&captures[4])?;
        let l = captures.get(5).map(|c| number(c.as_str())).transpose()?.unwrap_or(k);

        let command = match &captures[3] {
            "a" => ChangeCommand {
                source: n..n,
                target: k.saturating_sub(1)..l,
            },
            "d" => ChangeCommand {
                source: n.saturating_sub(1)..m,
                target: k..k,
            },
            _ => ChangeCommand {
                source: n.saturating_sub(1)..m,
                target: k.saturating_sub(1)..l,
            },
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Builds a script from change commands, filling the gaps between them with
/// Equal blocks.
pub fn script_from_commands(
    commands: &[ChangeCommand],
    source: &[Token],
    target: &[Token],
) -> NdiffResult<EditScript> {
    let mut script = EditScript::new();
    let (mut i, mut j) = (0, 0);

    let out_of_bounds = |command: &ChangeCommand| {
        NdiffError::oracle_malformed(format!(
            "change {:?} x {:?} is out of order or out of bounds",
            command.source, command.target
        ))
    };

    for command in commands {
        if command.source.start < i
            || command.target.start < j
            || command.source.end > source.len()
            || command.target.end > target.len()
            || command.source.start - i != command.target.start - j
        {
            return Err(out_of_bounds(command));
        }

        if command.source.start > i {
            script.push(DiffBlock::equal(&source[i..command.source.start]));
        }
        if !command.source.is_empty() {
            script.push(DiffBlock::delete(&source[command.source.clone()]));
        }
        if !command.target.is_empty() {
            script.push(DiffBlock::insert(&target[command.target.clone()]));
        }

        (i, j) = (command.source.end, command.target.end);
    }

    if source.len() - i != target.len() - j {
        return Err(NdiffError::oracle_malformed(
            "unchanged tails of the two sides differ in length",
        ));
    }
    if i < source.len() {
        script.push(DiffBlock::equal(&source[i..]));
    }

    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::tokens::lexer::Lexer;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn compact(lexer: &mut Lexer, text: &str) -> Vec<Token> {
        lexer
            .tokenize(text)
            .into_iter()
            .filter(|t| !t.is_whitespace())
            .collect()
    }

    #[rstest]
    #[case("2a3,4", 2..2, 2..4)]
    #[case("0a1", 0..0, 0..1)]
    #[case("5,6d4", 4..6, 4..4)]
    #[case("3d2", 2..3, 2..2)]
    #[case("7c8,9", 6..7, 7..9)]
    #[case("1,2c1", 0..2, 0..1)]
    fn change_commands_become_zero_based_ranges(
        #[case] line: &str,
        #[case] source: Range<usize>,
        #[case] target: Range<usize>,
    ) {
        let commands = parse_normal_format(line).unwrap();

        assert_eq!(commands, vec![ChangeCommand { source, target }]);
    }

    #[test]
    fn body_lines_are_skipped() {
        let output = "2c2\n< b\n---\n> x\n\\ No newline at end of file\n";

        assert_eq!(parse_normal_format(output).unwrap().len(), 1);
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_normal_format("this is not diff output").unwrap_err();

        assert!(matches!(err, NdiffError::OracleMalformed { .. }));
    }

    #[test]
    fn gaps_between_commands_are_equal() {
        let mut lexer = Lexer::new().unwrap();
        let source = compact(&mut lexer, "a b c d e");
        let target = compact(&mut lexer, "a x c d y");

        let commands = parse_normal_format("2c2\n< b\n---\n> x\n5c5\n< e\n---\n> y\n").unwrap();
        let script = script_from_commands(&commands, &source, &target).unwrap();

        let rendered: Vec<String> = script.iter().map(DiffBlock::to_string).collect();
        assert_eq!(rendered, vec![" a", "-b", "+x", " cd", "-e", "+y"]);
    }

    #[test]
    fn commands_past_the_end_are_malformed() {
        let mut lexer = Lexer::new().unwrap();
        let source = compact(&mut lexer, "a");
        let target = compact(&mut lexer, "b");

        let commands = parse_normal_format("1,3c1").unwrap();

        assert!(script_from_commands(&commands, &source, &target).is_err());
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let mut lexer = Lexer::new().unwrap();
        let source = compact(&mut lexer, "a");
        let target = compact(&mut lexer, "b");

        let oracle = ExternalDiffOracle::new("ndiff-no-such-program".to_string());
        let err = oracle.align(&source, &target).unwrap_err();

        assert!(matches!(err, NdiffError::OracleSpawn { .. }));
    }
}
