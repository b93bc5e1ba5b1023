//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use topiseg_engine::{Output, ProcessingMetadata, Trace};

/// JSON formatter - outputs one object per document inside a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
    include_metadata: bool,
    include_trace: bool,
    pretty: bool,
}

/// Segmentation of one input document
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Input file name
    pub source: String,
    /// Unit indices at which a new segment starts
    pub boundaries: Vec<usize>,
    /// Segments in document order
    pub segments: Vec<SegmentData>,
    /// Processing metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProcessingMetadata>,
    /// Algorithm diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
}

/// One segment in JSON output
#[derive(Debug, Serialize)]
pub struct SegmentData {
    /// First unit
    pub start: usize,
    /// One past the last unit
    pub end: usize,
    /// Segment text with units joined by spaces
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            include_metadata: false,
            include_trace: false,
            pretty: true,
        }
    }

    /// Include processing metadata per document
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Include the algorithm trace per document
    pub fn with_trace(mut self, include: bool) -> Self {
        self.include_trace = include;
        self
    }

    /// Pretty print instead of compact output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            boundaries: output.boundaries.clone(),
            segments: output
                .segments
                .iter()
                .map(|segment| SegmentData {
                    start: segment.start,
                    end: segment.end,
                    text: segment.text(),
                })
                .collect(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
            trace: self
                .include_trace
                .then(|| output.segmentation.trace.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::two_topic_output;
    use serde_json::Value;

    fn render(metadata: bool, trace: bool, pretty: bool) -> Value {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer)
                .with_metadata(metadata)
                .with_trace(trace)
                .with_pretty(pretty);
            formatter
                .format_document("doc.txt", &two_topic_output())
                .unwrap();
            formatter.finish().unwrap();
        }
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_basic_document() {
        let value = render(false, false, true);
        let document = &value[0];

        assert_eq!(document["source"], "doc.txt");
        assert_eq!(document["boundaries"], serde_json::json!([3]));
        assert_eq!(document["segments"][1]["start"], 3);
        assert_eq!(document["segments"][1]["end"], 6);
        assert!(document["segments"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("The striker"));
        assert!(document.get("metadata").is_none());
        assert!(document.get("trace").is_none());
    }

    #[test]
    fn test_metadata_and_trace() {
        let value = render(true, true, false);
        let document = &value[0];

        assert_eq!(document["metadata"]["unit_count"], 6);
        assert_eq!(document["metadata"]["algorithm"], "c99");
        assert!(document["trace"].get("C99").is_some());
    }

    #[test]
    fn test_empty_array_without_documents() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
