//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use topiseg_engine::Output;

/// Marker line written before each segment and after the last one
pub const SEGMENT_SEPARATOR: &str = "==========";

/// Plain text formatter - one unit per line, segments between marker lines
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        if output.is_empty() {
            return Ok(());
        }

        for segment in &output.segments {
            writeln!(self.writer, "{SEGMENT_SEPARATOR}")?;
            for unit in &segment.units {
                writeln!(self.writer, "{}", unit.trim())?;
            }
        }
        writeln!(self.writer, "{SEGMENT_SEPARATOR}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::two_topic_output;

    #[test]
    fn test_segments_between_separators() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_document("doc.txt", &two_topic_output())
                .unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], SEGMENT_SEPARATOR);
        assert!(lines[1].starts_with("The striker"));
        assert_eq!(lines[4], SEGMENT_SEPARATOR);
        assert!(lines[5].starts_with("Knead"));
        assert_eq!(lines[8], SEGMENT_SEPARATOR);
    }

    #[test]
    fn test_documents_separated_by_blank_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            let output = two_topic_output();
            formatter.format_document("a.txt", &output).unwrap();
            formatter.format_document("b.txt", &output).unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().filter(|line| line.is_empty()).count(), 1);
    }
}
