//! Novelty command logic: villager speech and rock-paper-shears.

use rand::Rng;

const HMMS: [&str; 3] = ["hmm", "hm", "hmmm"];

/// Replace every word of `speech` with a villager noise.
pub fn villager_speech(rng: &mut impl Rng, speech: &str) -> String {
    let words: Vec<&str> = speech
        .split_whitespace()
        .map(|_| HMMS[rng.gen_range(0..HMMS.len())])
        .collect();
    words.join(" ")
}

/// A rock-paper-shears gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Gesture {
    /// Rock blunts shears.
    #[display("rock")]
    Rock,
    /// Paper wraps rock.
    #[display("paper")]
    Paper,
    /// Shears cut paper.
    #[display("shears")]
    Shears,
}

impl Gesture {
    /// Parse a user's gesture, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "rock" => Some(Gesture::Rock),
            "paper" => Some(Gesture::Paper),
            "shears" => Some(Gesture::Shears),
            _ => None,
        }
    }

    /// The gesture this one defeats.
    pub fn beats(self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Shears,
            Gesture::Paper => Gesture::Rock,
            Gesture::Shears => Gesture::Paper,
        }
    }

    /// Pick a random gesture for the bot.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Gesture::Rock,
            1 => Gesture::Paper,
            _ => Gesture::Shears,
        }
    }
}

/// Outcome of a round, from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsOutcome {
    /// User beat the bot.
    UserWins,
    /// Bot beat the user.
    BotWins,
    /// Same gesture.
    Tie,
}

/// Score a round of rock-paper-shears.
pub fn play_rps(user: Gesture, bot: Gesture) -> RpsOutcome {
    if user == bot {
        RpsOutcome::Tie
    } else if user.beats() == bot {
        RpsOutcome::UserWins
    } else {
        RpsOutcome::BotWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn villager_replaces_each_word() {
        let mut rng = StepRng::new(0, 1);
        let out = villager_speech(&mut rng, "will you trade emeralds");
        assert_eq!(out.split_whitespace().count(), 4);
        assert!(out.split_whitespace().all(|w| HMMS.contains(&w)));
    }

    #[test]
    fn villager_ignores_extra_whitespace() {
        let mut rng = StepRng::new(0, 1);
        let out = villager_speech(&mut rng, "  two   words  ");
        assert_eq!(out.split_whitespace().count(), 2);
    }

    #[test]
    fn every_gesture_beats_exactly_one_other() {
        for user in [Gesture::Rock, Gesture::Paper, Gesture::Shears] {
            assert_eq!(play_rps(user, user), RpsOutcome::Tie);
            assert_eq!(play_rps(user, user.beats()), RpsOutcome::UserWins);
            assert_eq!(play_rps(user.beats(), user), RpsOutcome::BotWins);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Gesture::parse("Shears"), Some(Gesture::Shears));
        assert_eq!(Gesture::parse("lava bucket"), None);
    }
}
