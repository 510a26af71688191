//! Canned feedback for completed test attempts.
//!
//! The site shows one of five fixed encouragement strings after every
//! sing-back attempt. The pick is uniform and independent per attempt;
//! repeats across attempts are expected. Taking the RNG as a parameter
//! keeps the pick deterministic under test.

use rand::Rng;

/// The five feedback messages, in the order the site defines them.
pub const FEEDBACK_MESSAGES: [&str; 5] = [
    "Good attempt! Keep practicing to improve pitch accuracy. 🎵",
    "Nice try! Focus on staying on pitch throughout. Your rhythm was good! 👍",
    "Great effort! Try increasing your pitch control with more practice. Keep going! 💪",
    "Well done! Your voice is improving. Practice breath control for better results. 🌟",
    "Excellent try! Keep working on maintaining steady notes. You're on the right track! ✨",
];

/// Pick one message uniformly at random.
///
/// Pure function of `rng`; no other inputs, no error path.
pub fn pick_feedback<R: Rng>(rng: &mut R) -> &'static str {
    FEEDBACK_MESSAGES[rng.gen_range(0..FEEDBACK_MESSAGES.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn picks_stay_within_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let message = pick_feedback(&mut rng);
            assert!(FEEDBACK_MESSAGES.contains(&message));
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let draws = 10_000;

        for _ in 0..draws {
            *counts.entry(pick_feedback(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), FEEDBACK_MESSAGES.len());
        // Expected 2000 per message; a seeded RNG keeps this bound stable.
        for (&message, &count) in &counts {
            assert!(
                (1600..=2400).contains(&count),
                "{message:?} drawn {count} times out of {draws}"
            );
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        for _ in 0..50 {
            assert_eq!(pick_feedback(&mut a), pick_feedback(&mut b));
        }
    }
}
