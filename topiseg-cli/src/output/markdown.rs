//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use topiseg_engine::Output;

/// Markdown formatter - one section per document, one subsection per segment
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        writeln!(self.writer)?;

        for segment in &output.segments {
            self.segment_count += 1;
            writeln!(
                self.writer,
                "## Segment {} (units {}-{})",
                segment.index + 1,
                segment.start,
                segment.end - 1
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", segment.text())?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
