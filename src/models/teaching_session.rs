//! Full-screen autoplay over the current week's cards.
//! One cycle is: play the active card's clip, hold for a fixed gap once it
//! finishes, advance to the next card (wrapping), play again. The session
//! runs until `exit` is called.

use super::CardView;
use std::time::{Duration, Instant};

/// Pause between one clip finishing and the next card starting.
pub const CARD_GAP: Duration = Duration::from_millis(1500);

/// What the session is doing between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// The active card's clip has been requested; waiting for it to finish.
    Playing,
    /// Clip done; holding until the deadline before advancing.
    Waiting { until: Instant },
}

pub struct TeachingSession {
    cards: Vec<CardView>,
    current_index: usize,
    running: bool,
    phase: Phase,
}

impl TeachingSession {
    /// Starts a session over a detached copy of `cards`, so later changes
    /// to the live list cannot reach a running session. Returns `None`
    /// when there is nothing to play. The caller starts the first clip
    /// (the one for [`Self::current_card`]) itself.
    pub fn enter(cards: &[CardView]) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            cards: cards.to_vec(),
            current_index: 0,
            running: true,
            phase: Phase::Playing,
        })
    }

    pub fn current_card(&self) -> &CardView {
        &self.cards[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Records that the active clip finished (or was written off after a
    /// playback failure) and starts the inter-card gap. Ignored once the
    /// session has been stopped, and while already waiting.
    pub fn clip_finished(&mut self, now: Instant) {
        if self.running && self.phase == Phase::Playing {
            self.phase = Phase::Waiting { until: now + CARD_GAP };
        }
    }

    /// Advances past the gap once its deadline has passed, returning the
    /// card whose clip should start now. Returns `None` while a clip is
    /// still playing, while the gap is still running, or after `exit`.
    pub fn next_due(&mut self, now: Instant) -> Option<&CardView> {
        if !self.running {
            return None;
        }
        match self.phase {
            Phase::Waiting { until } if now >= until => {
                self.current_index = (self.current_index + 1) % self.cards.len();
                self.phase = Phase::Playing;
                Some(&self.cards[self.current_index])
            }
            _ => None,
        }
    }

    /// Stops the session and drops any pending gap deadline, so a stale
    /// advance can never fire afterwards. A clip that is already playing
    /// is left to run out on its own.
    pub fn exit(&mut self) {
        self.running = false;
        self.phase = Phase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordRecord;

    fn cards(words: &[&str]) -> Vec<CardView> {
        words
            .iter()
            .map(|w| {
                CardView::new(
                    &WordRecord {
                        word: w.to_string(),
                        phonetic: None,
                        pos: None,
                        chinese: None,
                        sentence: None,
                    },
                    "3",
                    1,
                )
            })
            .collect()
    }

    #[test]
    fn test_enter_needs_cards() {
        assert!(TeachingSession::enter(&[]).is_none());
    }

    #[test]
    fn test_enter_starts_at_first_card() {
        let session = TeachingSession::enter(&cards(&["a", "b"])).unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(session.is_running());
        assert_eq!(session.current_card().word.word, "a");
    }

    #[test]
    fn test_gap_then_advance() {
        let start = Instant::now();
        let mut session = TeachingSession::enter(&cards(&["a", "b", "c"])).unwrap();

        // Nothing is due while the clip is still playing.
        assert!(session.next_due(start).is_none());

        session.clip_finished(start);
        // Still inside the gap.
        assert!(session.next_due(start + CARD_GAP / 2).is_none());

        let card = session.next_due(start + CARD_GAP).unwrap();
        assert_eq!(card.word.word, "b");
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_index_wraps_after_last_card() {
        let mut now = Instant::now();
        let deck = cards(&["a", "b", "c"]);
        let mut session = TeachingSession::enter(&deck).unwrap();

        for _ in 0..deck.len() {
            session.clip_finished(now);
            now += CARD_GAP;
            assert!(session.next_due(now).is_some());
        }

        // After as many advances as there are cards, we are back at the start.
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_exit_cancels_pending_advance() {
        let start = Instant::now();
        let mut session = TeachingSession::enter(&cards(&["a", "b"])).unwrap();

        session.clip_finished(start);
        session.exit();

        assert!(!session.is_running());
        // Even long past the deadline, the stale gap timer must not fire.
        assert!(session.next_due(start + CARD_GAP * 10).is_none());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_clip_finished_after_exit_is_ignored() {
        let start = Instant::now();
        let mut session = TeachingSession::enter(&cards(&["a", "b"])).unwrap();

        session.exit();
        session.clip_finished(start);
        assert!(session.next_due(start + CARD_GAP).is_none());
    }

    #[test]
    fn test_reenter_restarts_fresh() {
        let start = Instant::now();
        let deck = cards(&["a", "b"]);

        let mut first = TeachingSession::enter(&deck).unwrap();
        first.clip_finished(start);
        first.next_due(start + CARD_GAP);
        assert_eq!(first.current_index(), 1);
        first.exit();

        let second = TeachingSession::enter(&deck).unwrap();
        assert_eq!(second.current_index(), 0);
        assert!(second.is_running());
    }

    #[test]
    fn test_session_holds_a_detached_copy() {
        let mut deck = cards(&["a", "b"]);
        let session = TeachingSession::enter(&deck).unwrap();

        deck.clear();

        assert_eq!(session.card_count(), 2);
        assert_eq!(session.current_card().word.word, "a");
    }

    #[test]
    fn test_duplicate_finish_does_not_double_advance() {
        let start = Instant::now();
        let mut session = TeachingSession::enter(&cards(&["a", "b", "c"])).unwrap();

        session.clip_finished(start);
        // A second completion (e.g. a stray grace timer) lands in Waiting
        // and must not reset the deadline or advance twice.
        session.clip_finished(start + CARD_GAP / 2);

        assert!(session.next_due(start + CARD_GAP).is_some());
        assert_eq!(session.current_index(), 1);
        assert!(session.next_due(start + CARD_GAP * 2).is_none());
    }
}
