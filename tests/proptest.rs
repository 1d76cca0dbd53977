//! Property-based tests for pigeonstats.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use pigeonstats::parser::TranscriptParser;
use pigeonstats::Outcome;

/// One message block of a generated transcript.
#[derive(Debug, Clone)]
struct Block {
    day: u32,
    sender: String,
    marker: Option<String>,
}

impl Block {
    /// Expected outcome for the transcript owner, if the marker is one of
    /// the recognized result lines.
    fn expected_outcome(&self) -> Option<Outcome> {
        let is_me = self.sender == "Me";
        match self.marker.as_deref() {
            Some("I won!") => Some(if is_me { Outcome::Win } else { Outcome::Loss }),
            Some("You Won!") => Some(if is_me { Outcome::Loss } else { Outcome::Win }),
            Some("Draw!") => Some(Outcome::Draw),
            _ => None,
        }
    }

    fn render(&self) -> String {
        let mut block = format!("Jan {}, 2024 10:00:00 AM\n{}\n", self.day, self.sender);
        match &self.marker {
            Some(marker) => {
                block.push_str("GamePigeon message:\n");
                block.push_str(marker);
                block.push('\n');
            }
            None => block.push_str("just chatting\n"),
        }
        block
    }
}

fn arb_block() -> impl Strategy<Value = Block> {
    (
        1u32..=28,
        prop::sample::select(vec![
            "Me".to_string(),
            "Alex".to_string(),
            "Sam".to_string(),
        ]),
        prop::option::of(prop::sample::select(vec![
            "I won!".to_string(),
            "You Won!".to_string(),
            "Draw!".to_string(),
            "8 Ball".to_string(),
        ])),
    )
        .prop_map(|(day, sender, marker)| Block { day, sender, marker })
}

fn arb_blocks(max_len: usize) -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(arb_block(), 0..max_len)
}

fn render_transcript(blocks: &[Block]) -> String {
    blocks.iter().map(Block::render).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Counts always match the recognized markers, block by block.
    #[test]
    fn counts_match_expected_outcomes(blocks in arb_blocks(20)) {
        let transcript = render_transcript(&blocks);
        let summary = TranscriptParser::new().parse_str(&transcript);

        let mut wins = 0u64;
        let mut losses = 0u64;
        let mut draws = 0u64;
        for block in &blocks {
            match block.expected_outcome() {
                Some(Outcome::Win) => wins += 1,
                Some(Outcome::Loss) => losses += 1,
                Some(Outcome::Draw) => draws += 1,
                None => {}
            }
        }

        prop_assert_eq!(summary.wins, wins);
        prop_assert_eq!(summary.losses, losses);
        prop_assert_eq!(summary.draws, draws);
    }

    /// Total is always the sum of the per-outcome counts.
    #[test]
    fn total_is_sum_of_counts(blocks in arb_blocks(20)) {
        let transcript = render_transcript(&blocks);
        let summary = TranscriptParser::new().parse_str(&transcript);

        prop_assert_eq!(
            summary.total(),
            summary.wins + summary.losses + summary.draws
        );
    }

    /// The timeline is sorted regardless of input block order.
    #[test]
    fn timeline_is_sorted(blocks in arb_blocks(20)) {
        let transcript = render_transcript(&blocks);
        let summary = TranscriptParser::new().parse_str(&transcript);

        let stamps: Vec<_> = summary.timeline.iter().map(|e| e.timestamp).collect();
        prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Every dated outcome lands on the timeline; here every block
    /// carries a parseable timestamp, so the timeline length equals the
    /// marker count.
    #[test]
    fn dated_outcomes_fill_timeline(blocks in arb_blocks(20)) {
        let transcript = render_transcript(&blocks);
        let summary = TranscriptParser::new().parse_str(&transcript);

        let expected = blocks
            .iter()
            .filter(|b| b.expected_outcome().is_some())
            .count() as u64;
        prop_assert_eq!(summary.total(), expected);
        prop_assert_eq!(summary.timeline.len() as u64, expected);
    }

    /// Transcripts without any markers never produce counts.
    #[test]
    fn chatter_only_is_empty(blocks in arb_blocks(20)) {
        let chatter: Vec<Block> = blocks
            .into_iter()
            .map(|b| Block { marker: None, ..b })
            .collect();
        let transcript = render_transcript(&chatter);
        let summary = TranscriptParser::new().parse_str(&transcript);

        prop_assert!(summary.is_empty());
        prop_assert!(summary.timeline.is_empty());
    }
}
