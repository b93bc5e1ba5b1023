//! Property tests for input preparation and end-to-end segmentation

use proptest::prelude::*;
use topiseg_core::lexicon::is_word;
use topiseg_engine::input::{split_units, tokenize};
use topiseg_engine::{Algorithm, Output, TopicSegmenterBuilder, UnitMode};

const VOCABULARY: [&str; 10] = [
    "river", "boat", "bank", "fish", "violin", "melody", "orchestra", "bread", "dough", "oven",
];

fn arb_mode() -> impl Strategy<Value = UnitMode> {
    prop_oneof![Just(UnitMode::Line), Just(UnitMode::Sentence)]
}

/// Sentences of vocabulary words, each ending in a period, separated by a space or a newline
fn arb_text(max_sentences: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 1..8),
            any::<bool>(),
        ),
        1..max_sentences,
    )
    .prop_map(|sentences| {
        let mut text = String::new();
        for (words, newline) in sentences {
            text.push_str(&words.join(" "));
            text.push('.');
            text.push(if newline { '\n' } else { ' ' });
        }
        text
    })
}

fn assert_partition(output: &Output) -> Result<(), TestCaseError> {
    let n = output.metadata.unit_count;
    prop_assert!(output.segmentation.is_partition());
    prop_assert_eq!(output.segmentation.unit_count, n);

    let mut next = 0;
    for (i, segment) in output.segments.iter().enumerate() {
        prop_assert_eq!(segment.index, i);
        prop_assert_eq!(segment.start, next);
        prop_assert!(segment.end > segment.start);
        prop_assert_eq!(segment.units.len(), segment.end - segment.start);
        next = segment.end;
    }
    prop_assert_eq!(next, n);

    let starts: Vec<usize> = output.segments.iter().skip(1).map(|s| s.start).collect();
    prop_assert_eq!(&output.boundaries, &starts);
    Ok(())
}

proptest! {
    /// Units are never blank and carry no surrounding whitespace
    #[test]
    fn split_units_yields_trimmed_non_blank_units(text in any::<String>(), mode in arb_mode()) {
        for unit in split_units(&text, mode) {
            prop_assert!(!unit.is_empty());
            prop_assert_eq!(unit.trim(), unit.as_str());
        }
    }

    /// Line mode keeps exactly the non-blank lines
    #[test]
    fn line_units_match_non_blank_lines(text in "[a-z .\t\n]{0,120}") {
        let expected = text.lines().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(split_units(&text, UnitMode::Line).len(), expected);
    }

    /// Every token is a word and comes from the unit
    #[test]
    fn tokens_are_words(unit in any::<String>()) {
        for token in tokenize(&unit) {
            prop_assert!(is_word(&token));
            prop_assert!(unit.contains(token.as_str()));
        }
    }

    /// C99 output always tiles the units of the document
    #[test]
    fn c99_output_is_partition(text in arb_text(20), mode in arb_mode(), weighted in any::<bool>()) {
        let segmenter = TopicSegmenterBuilder::new()
            .unit_mode(mode)
            .mask_size(3)
            .weighted(weighted)
            .build()
            .unwrap();
        let output = segmenter.process_text(&text).unwrap();
        prop_assert_eq!(output.metadata.unit_count, split_units(&text, mode).len());
        assert_partition(&output)?;
    }

    /// TextTiling output always tiles the units of the document
    #[test]
    fn texttiling_output_is_partition(
        text in arb_text(30),
        mode in arb_mode(),
        window in 1usize..8,
        step in 1usize..5,
    ) {
        let segmenter = TopicSegmenterBuilder::new()
            .algorithm(Algorithm::TextTiling)
            .unit_mode(mode)
            .window_size(window)
            .step_size(step)
            .build()
            .unwrap();
        let output = segmenter.process_text(&text).unwrap();
        assert_partition(&output)?;
    }
}
