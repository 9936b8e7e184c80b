use std::sync::atomic::{AtomicU32, Ordering};

/// Lowest correct-answer count that makes the reward screen trigger the
/// panel bonus animation.
const BONUS_MIN: u32 = 7;
/// Highest such count; past it the player missed too few for the bonus tier.
const BONUS_MAX: u32 = 8;

/// Process-wide correct-answer tally for the game in progress.
///
/// A single counter is shared by every connection: the panel hosts one game
/// at a time, so scores are not scoped per player. Two simultaneous games
/// would trample each other's tally; that single-session assumption is
/// inherited from the hardware setup. The tally is never persisted and
/// starts at zero on every process start.
#[derive(Debug, Default)]
pub struct SessionScore {
    correct: AtomicU32,
}

impl SessionScore {
    /// Fresh tally at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically bump the tally for a correct answer, returning the new count.
    pub fn record_correct(&self) -> u32 {
        self.correct.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Read-only snapshot of the current count.
    pub fn current(&self) -> u32 {
        self.correct.load(Ordering::SeqCst)
    }

    /// Set the tally back to zero for the next game.
    pub fn reset(&self) {
        self.correct.store(0, Ordering::SeqCst);
    }

    /// Whether the current count sits in the bonus tier.
    pub fn in_bonus_range(&self) -> bool {
        matches!(self.current(), BONUS_MIN..=BONUS_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_correct_answers_count_n() {
        let score = SessionScore::new();
        for expected in 1..=5 {
            assert_eq!(score.record_correct(), expected);
        }
        assert_eq!(score.current(), 5);
    }

    #[test]
    fn reset_is_idempotent() {
        let score = SessionScore::new();
        score.record_correct();
        score.record_correct();

        score.reset();
        assert_eq!(score.current(), 0);
        score.reset();
        assert_eq!(score.current(), 0);
    }

    #[test]
    fn bonus_range_is_seven_or_eight() {
        let score = SessionScore::new();
        assert!(!score.in_bonus_range());

        for count in 1..=10 {
            score.record_correct();
            assert_eq!(
                score.in_bonus_range(),
                count == 7 || count == 8,
                "count {count}"
            );
        }
    }
}
