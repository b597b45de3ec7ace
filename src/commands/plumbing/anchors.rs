use crate::areas::comparison::Comparison;
use std::io::Write;

impl Comparison {
    /// Prints the anchors the comparison splits on, one `source,target,length`
    /// line each, followed by their count.
    pub async fn show_anchors(&self) -> anyhow::Result<()> {
        let (source, target) = self.load_inputs().await?;
        let outcome = self.run(&source, &target)?;

        for anchor in &outcome.anchors {
            writeln!(self.writer(), "{anchor}")?;
        }
        writeln!(self.writer(), "{}", anchor_count(outcome.anchors.len()))?;

        Ok(())
    }
}

fn anchor_count(count: usize) -> String {
    match count {
        1 => "1 anchor".to_string(),
        n => format!("{n} anchors"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 anchors")]
    #[case(1, "1 anchor")]
    #[case(7, "7 anchors")]
    fn count_line_agrees_in_number(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(anchor_count(count), expected);
    }
}
