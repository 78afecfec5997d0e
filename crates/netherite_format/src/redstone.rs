//! Redstone arithmetic helpers.
//!
//! Container math uses double-chest capacity (54 slots of 64 items) and the
//! comparator formula from the game: `floor(1 + (count / capacity) * 14)`
//! for a non-empty container, zero otherwise.

/// Items in a full stack.
const STACK: u64 = 64;
/// Slots in a double chest (and in a chest full of shulker boxes).
const DOUBLE_CHEST_SLOTS: u64 = 54;
/// Slots in a single chest or shulker box.
const SINGLE_CHEST_SLOTS: u64 = 27;
/// Items held by a full double chest.
const DOUBLE_CHEST_ITEMS: u64 = STACK * DOUBLE_CHEST_SLOTS;

/// Containers needed to store a number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageReport {
    /// Full or partial stacks.
    pub stacks: u64,
    /// Single chests (or shulker boxes) needed.
    pub single_chests: u64,
    /// Double chests needed.
    pub double_chests: u64,
    /// Shulker boxes needed.
    pub shulker_boxes: u64,
    /// Double chests needed to hold those shulker boxes.
    pub chests_of_shulkers: u64,
}

/// Work out how many chests and shulker boxes hold `items`.
pub fn storage_report(items: u64) -> StorageReport {
    let stacks = items.div_ceil(STACK);
    let single_chests = stacks.div_ceil(SINGLE_CHEST_SLOTS);
    StorageReport {
        stacks,
        single_chests,
        double_chests: stacks.div_ceil(DOUBLE_CHEST_SLOTS),
        shulker_boxes: single_chests,
        chests_of_shulkers: single_chests.div_ceil(DOUBLE_CHEST_SLOTS),
    }
}

/// Comparator output strength for `items` in a double chest.
pub fn comparator_strength(items: u64) -> u8 {
    if items == 0 {
        return 0;
    }
    let strength = 1.0 + (items as f64 / DOUBLE_CHEST_ITEMS as f64) * 14.0;
    (strength.floor() as u64).min(15) as u8
}

/// Minimum items in a double chest to emit a comparator signal of
/// `strength`.
pub fn items_for_strength(strength: u8) -> u64 {
    let strength = u64::from(strength.min(15));
    if strength == 0 {
        return 0;
    }
    let threshold = (DOUBLE_CHEST_ITEMS * (strength - 1)).div_ceil(14);
    threshold.max(1)
}

/// Convert game ticks to seconds (20 ticks per second).
pub fn ticks_to_seconds(ticks: u64) -> f64 {
    ticks as f64 / 20.0
}

/// Convert seconds to game ticks.
pub fn seconds_to_ticks(seconds: f64) -> f64 {
    seconds * 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_for_one_chest_of_items() {
        let report = storage_report(STACK * SINGLE_CHEST_SLOTS);
        assert_eq!(report.stacks, 27);
        assert_eq!(report.single_chests, 1);
        assert_eq!(report.double_chests, 1);
        assert_eq!(report.shulker_boxes, 1);
        assert_eq!(report.chests_of_shulkers, 1);
    }

    #[test]
    fn storage_rounds_partial_containers_up() {
        let report = storage_report(DOUBLE_CHEST_ITEMS + 1);
        assert_eq!(report.double_chests, 2);
        assert_eq!(report.single_chests, 3);
    }

    #[test]
    fn comparator_strength_matches_game_boundaries() {
        assert_eq!(comparator_strength(0), 0);
        assert_eq!(comparator_strength(1), 1);
        // A full double chest pegs the signal.
        assert_eq!(comparator_strength(DOUBLE_CHEST_ITEMS), 15);
        // Half full is strength 8.
        assert_eq!(comparator_strength(DOUBLE_CHEST_ITEMS / 2), 8);
    }

    #[test]
    fn items_for_strength_round_trips_through_comparator() {
        for strength in 1..=15u8 {
            let items = items_for_strength(strength);
            assert_eq!(comparator_strength(items), strength, "strength {strength}");
        }
    }

    #[test]
    fn tick_conversions() {
        assert_eq!(ticks_to_seconds(20), 1.0);
        assert_eq!(ticks_to_seconds(90), 4.5);
        assert_eq!(seconds_to_ticks(2.5), 50.0);
    }
}
