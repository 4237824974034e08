//! Skill match scoring
//!
//! Scores how well a member covers a role's required skills, as a whole
//! percentage.

use crate::skill::SkillLevel;
use crate::team::{Role, TeamMember};

/// Score of a role with no requirements, and the best possible score
pub const PERFECT_MATCH: u8 = 100;

/// Compatibility of `member` with `role`, in `0..=100`.
///
/// Each required skill contributes the member's level on it (0 when the
/// member lacks the skill or the id does not resolve). The sum is taken over
/// `5 * requirements` and rounded to the nearest integer, halves rounding up.
/// A role without requirements scores [`PERFECT_MATCH`] for everyone.
/// `min_level` is not consulted.
///
/// # Example
///
/// ```
/// use allocator_domain::{Role, SkillLevel, TeamMember, skill_match_score};
///
/// let role = Role::new("r1", "Frontend", "")
///     .with_requirement("s1", SkillLevel::try_new(3).ok())
///     .with_requirement("s3", None);
/// let member = TeamMember::new("m1", "Alex").with_skill("s1", SkillLevel::try_new(4).unwrap());
///
/// // 4 of a possible 10
/// assert_eq!(skill_match_score(&member, &role), 40);
/// ```
pub fn skill_match_score(member: &TeamMember, role: &Role) -> u8 {
    if role.required_skills.is_empty() {
        return PERFECT_MATCH;
    }

    let total: u32 = role
        .required_skills
        .iter()
        .filter_map(|req| member.level_of(&req.skill_id))
        .map(|level| u32::from(level.value()))
        .sum();
    let max = role.required_skills.len() as u32 * u32::from(SkillLevel::MAX);

    // round(total / max * 100) with halves going up, in integer arithmetic
    let scaled = (total * 2 * u32::from(PERFECT_MATCH) + max) / (2 * max);
    scaled.min(u32::from(PERFECT_MATCH)) as u8
}
