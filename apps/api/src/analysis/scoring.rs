//! Relevance aggregation.
//!
//! Folds the keyword score and three capped feature components into the
//! single 0-100 relevance score the ranking sorts by. Weights and caps are
//! inherited scoring behavior: keyword overlap carries half the weight, the
//! rest rewards breadth of skills, quantified achievements, and tenure.

/// Weight applied to the 0-100 keyword score.
const KEYWORD_WEIGHT: f64 = 0.5;
/// Points per detected skill, capped.
const SKILL_POINTS: u32 = 5;
const SKILL_CAP: u32 = 30;
/// Points per achievement line, capped.
const ACHIEVEMENT_POINTS: u32 = 4;
const ACHIEVEMENT_CAP: u32 = 20;
/// Points per year of experience, capped.
const EXPERIENCE_POINTS: u32 = 2;
const EXPERIENCE_CAP: u32 = 20;

const MAX_SCORE: u32 = 100;

/// Aggregates the per-resume features into the ranking score.
pub fn relevance_score(
    keyword_score: u32,
    skills_count: usize,
    achievements_count: usize,
    years: u32,
) -> u32 {
    let skill_component = (skills_count as u32).saturating_mul(SKILL_POINTS).min(SKILL_CAP);
    let achievement_component = (achievements_count as u32)
        .saturating_mul(ACHIEVEMENT_POINTS)
        .min(ACHIEVEMENT_CAP);
    let experience_component = years.saturating_mul(EXPERIENCE_POINTS).min(EXPERIENCE_CAP);

    let base = KEYWORD_WEIGHT * keyword_score as f64
        + (skill_component + achievement_component + experience_component) as f64;

    base.min(MAX_SCORE as f64).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_inputs_score_zero() {
        assert_eq!(relevance_score(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_saturated_inputs_clamp_to_exactly_100() {
        // 50 + 30 + 20 + 20 = 120 before the clamp.
        assert_eq!(relevance_score(100, 100, 100, 100), 100);
    }

    #[test]
    fn test_component_arithmetic() {
        // 40/2 + 2*5 + 1*4 + 3*2 = 20 + 10 + 4 + 6
        assert_eq!(relevance_score(40, 2, 1, 3), 40);
    }

    #[test]
    fn test_odd_keyword_score_floors() {
        // 33 * 0.5 = 16.5, floored.
        assert_eq!(relevance_score(33, 0, 0, 0), 16);
    }

    #[test]
    fn test_skill_component_caps_at_30() {
        assert_eq!(relevance_score(0, 7, 0, 0), 30);
        assert_eq!(relevance_score(0, 6, 0, 0), 30);
        assert_eq!(relevance_score(0, 5, 0, 0), 25);
    }

    #[test]
    fn test_achievement_component_caps_at_20() {
        assert_eq!(relevance_score(0, 0, 6, 0), 20);
        assert_eq!(relevance_score(0, 0, 4, 0), 16);
    }

    #[test]
    fn test_experience_component_caps_at_20() {
        assert_eq!(relevance_score(0, 0, 0, 15), 20);
        assert_eq!(relevance_score(0, 0, 0, 9), 18);
    }

    #[test]
    fn test_huge_years_do_not_overflow() {
        assert_eq!(relevance_score(0, 0, 0, u32::MAX), 20);
    }

    #[test]
    fn test_score_bounded() {
        for kw in [0, 33, 67, 100] {
            for skills in [0, 3, 10] {
                let score = relevance_score(kw, skills, 5, 8);
                assert!(score <= 100, "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(relevance_score(73, 4, 2, 6), relevance_score(73, 4, 2, 6));
    }
}
