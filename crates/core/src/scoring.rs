//! Scoring module - line-clear rewards
//!
//! Two reward policies exist across game variants: points per cleared row
//! (the canonical rule, 100 each) and a flat bonus per clear pass no matter
//! how many rows it removed. Both are pure functions of the pass result.

use blockfall_types::LineReward;

/// Points awarded for one clear pass that removed `rows` full rows
pub fn line_reward(policy: LineReward, rows: usize) -> u32 {
    match policy {
        LineReward::PerRow(points) => points * rows as u32,
        LineReward::PerClear(points) => {
            if rows > 0 {
                points
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::LINE_REWARD_PER_ROW;

    #[test]
    fn per_row_scales_with_rows() {
        let policy = LineReward::PerRow(LINE_REWARD_PER_ROW);
        assert_eq!(line_reward(policy, 0), 0);
        assert_eq!(line_reward(policy, 1), 100);
        assert_eq!(line_reward(policy, 2), 200);
        assert_eq!(line_reward(policy, 4), 400);
    }

    #[test]
    fn per_clear_is_flat() {
        let policy = LineReward::PerClear(10);
        assert_eq!(line_reward(policy, 0), 0);
        assert_eq!(line_reward(policy, 1), 10);
        assert_eq!(line_reward(policy, 4), 10);
    }
}
