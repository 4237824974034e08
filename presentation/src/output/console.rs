//! Console output formatter for team state and allocation results

use allocator_application::{AssignmentChange, MatchScore, TeamState};
use allocator_domain::{
    AllocationSummary, AssignmentIssue, Role, SkillCatalog, SkillId,
    SkillRequirement, TeamAllocation, TeamMember, skill_match_score,
};
use colored::{ColoredString, Colorize};
use serde::Serialize;

const WIDTH: usize = 60;

/// Formats team state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Role board: every role with its holder and requirements
    pub fn board(state: &TeamState) -> String {
        let team = &state.allocation;
        let summary = AllocationSummary::of(&team.members, &team.roles);
        let mut output = String::new();

        output.push_str(&Self::header(&team.name));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), summary));

        output.push_str(&Self::section_header("Roles"));
        if team.roles.is_empty() {
            output.push_str(&format!("  {}\n", "No roles yet. Add one with `role add`.".dimmed()));
        }
        for role in &team.roles {
            output.push_str(&Self::role_line(team, &state.skills, role));
        }

        let free: Vec<&TeamMember> = team.members.iter().filter(|m| !m.is_assigned()).collect();
        if !free.is_empty() {
            output.push_str(&Self::section_header("Unassigned members"));
            for member in free {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    format!("[{}]", member.initials()).bold(),
                    member.name,
                    format!("({})", member.id).dimmed()
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn role_line(team: &TeamAllocation, skills: &SkillCatalog, role: &Role) -> String {
        let mut output = format!(
            "\n{} {} {}\n",
            Self::swatch(role.color.as_deref()),
            role.name.bold(),
            format!("({})", role.id).dimmed()
        );
        if !role.description.is_empty() {
            output.push_str(&format!("  {}\n", role.description.dimmed()));
        }

        match team.assigned_member_of(role) {
            Some(member) => {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    "Held by:".cyan(),
                    member.name.green().bold(),
                    Self::score_badge(skill_match_score(member, role))
                ));
                let unmet = role.unmet_requirements(member);
                if !unmet.is_empty() {
                    output.push_str(&format!(
                        "  {} {}\n",
                        "Below minimum:".yellow(),
                        Self::requirement_list(skills, &unmet)
                    ));
                }
            }
            None => output.push_str(&format!("  {} {}\n", "Held by:".cyan(), "(unfilled)".red())),
        }

        if !role.required_skills.is_empty() {
            let all: Vec<&SkillRequirement> = role.required_skills.iter().collect();
            output.push_str(&format!(
                "  {} {}\n",
                "Requires:".cyan(),
                Self::requirement_list(skills, &all)
            ));
        }
        output
    }

    /// Member list with skills, preferences and current role
    pub fn members(state: &TeamState) -> String {
        let team = &state.allocation;
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} Members", team.name)));
        output.push('\n');
        if team.members.is_empty() {
            output.push_str(&format!("  {}\n", "No members yet. Add one with `member add`.".dimmed()));
        }

        for member in &team.members {
            output.push_str(&format!(
                "\n{} {} {}\n",
                format!("[{}]", member.initials()).bold(),
                member.name.bold(),
                format!("({})", member.id).dimmed()
            ));

            let role = member
                .assigned_role
                .as_ref()
                .map(|id| Self::role_name(team, id.as_str()));
            output.push_str(&format!(
                "  {} {}\n",
                "Role:".cyan(),
                role.map(|r| r.normal()).unwrap_or_else(|| "(none)".dimmed())
            ));

            if !member.skills.is_empty() {
                let skills: Vec<String> = member
                    .skills
                    .iter()
                    .map(|s| {
                        format!(
                            "{} {}",
                            Self::skill_name(&state.skills, &s.skill_id),
                            s.level
                        )
                    })
                    .collect();
                output.push_str(&format!("  {} {}\n", "Skills:".cyan(), skills.join(", ")));
            }

            if !member.preferred_roles.is_empty() {
                let prefs: Vec<String> = member
                    .preferred_roles
                    .iter()
                    .map(|id| Self::role_name(team, id.as_str()))
                    .collect();
                output.push_str(&format!("  {} {}\n", "Prefers:".cyan(), prefs.join(" > ")));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Skill catalog listing
    pub fn skills(catalog: &SkillCatalog) -> String {
        let mut output = Self::section_header("Skills");
        if catalog.is_empty() {
            output.push_str(&format!("  {}\n", "The catalog is empty.".dimmed()));
        }
        for skill in catalog.iter() {
            output.push_str(&format!("  {:<6} {}\n", skill.id.as_str().dimmed(), skill.name));
        }
        output
    }

    /// Result of a manual assignment, with names resolved
    pub fn change(change: &AssignmentChange, team: &TeamAllocation) -> String {
        let role = Self::role_name(team, change.role.as_str());
        let mut output = match &change.member {
            Some(member) => format!(
                "{} {} now holds {}\n",
                "v".green().bold(),
                Self::member_name(team, member.as_str()).bold(),
                role.bold()
            ),
            None => format!("{} {} is now unfilled\n", "v".green().bold(), role.bold()),
        };
        if let Some(displaced) = &change.displaced {
            output.push_str(&format!(
                "  {} no longer holds it\n",
                Self::member_name(team, displaced.as_str())
            ));
        }
        if let Some(vacated) = &change.vacated {
            output.push_str(&format!(
                "  {} is now unfilled\n",
                Self::role_name(team, vacated.as_str())
            ));
        }
        output
    }

    /// A single member/role score with requirement detail
    pub fn score(score: &MatchScore, skills: &SkillCatalog) -> String {
        let mut output = format!(
            "{} for {} {}\n",
            Self::score_badge(score.score),
            score.member_name.bold(),
            format!("as {}", score.role_name).cyan()
        );
        if !score.unmet.is_empty() {
            let unmet: Vec<&SkillRequirement> = score.unmet.iter().collect();
            output.push_str(&format!(
                "  {} {}\n",
                "Below minimum:".yellow(),
                Self::requirement_list(skills, &unmet)
            ));
        }
        output
    }

    /// Every pair, best first
    pub fn ranking(scores: &[MatchScore]) -> String {
        let mut output = Self::section_header("Skill match ranking");
        if scores.is_empty() {
            output.push_str(&format!("  {}\n", "Nothing to score.".dimmed()));
        }
        for score in scores {
            output.push_str(&format!(
                "  {:>4}  {:<24} {}\n",
                Self::score_color(score.score, format!("{}%", score.score)),
                score.member_name,
                score.role_name
            ));
        }
        output
    }

    /// Consistency report
    pub fn issues(issues: &[AssignmentIssue], summary: &AllocationSummary) -> String {
        let mut output = String::new();
        if issues.is_empty() {
            output.push_str(&format!("{} Assignments are consistent\n", "v".green().bold()));
        } else {
            output.push_str(&format!(
                "{} {} assignment issue(s)\n",
                "x".red().bold(),
                issues.len()
            ));
            for issue in issues {
                output.push_str(&format!("  * {}\n", issue));
            }
        }
        output.push_str(&format!("  {}\n", summary));
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    // ==================== Helpers ====================

    fn requirement_list(skills: &SkillCatalog, requirements: &[&SkillRequirement]) -> String {
        requirements
            .iter()
            .map(|req| match req.min_level {
                Some(min) => format!("{} (min {})", Self::skill_name(skills, &req.skill_id), min),
                None => Self::skill_name(skills, &req.skill_id),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn skill_name(skills: &SkillCatalog, id: &SkillId) -> String {
        skills
            .name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} (unknown skill)", id))
    }

    fn role_name(team: &TeamAllocation, id: &str) -> String {
        team.roles
            .iter()
            .find(|r| r.id.as_str() == id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| format!("{} (unknown role)", id))
    }

    fn member_name(team: &TeamAllocation, id: &str) -> String {
        team.members
            .iter()
            .find(|m| m.id.as_str() == id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("{} (unknown member)", id))
    }

    fn score_badge(score: u8) -> ColoredString {
        Self::score_color(score, format!("{}% match", score))
    }

    fn score_color(score: u8, text: String) -> ColoredString {
        match score {
            80..=100 => text.green(),
            50..=79 => text.yellow(),
            _ => text.red(),
        }
    }

    /// Colored bullet for a `#RRGGBB` role color
    fn swatch(color: Option<&str>) -> ColoredString {
        match color.and_then(parse_hex_color) {
            Some((r, g, b)) => "●".truecolor(r, g, b),
            None => "●".normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocator_domain::team::seed;
    use allocator_domain::{AllocationMethod, MemberId, RoleId};

    fn sample_state() -> TeamState {
        colored::control::set_override(false);
        let mut allocation = seed::sample_allocation("Sample Team");
        allocation.allocate(AllocationMethod::Skills);
        TeamState::new(allocation, seed::default_skills())
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#8B5CF6"), Some((0x8B, 0x5C, 0xF6)));
        assert_eq!(parse_hex_color("8B5CF6"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_board_shows_holders_and_requirements() {
        let board = ConsoleFormatter::board(&sample_state());
        assert!(board.contains("Sample Team"));
        assert!(board.contains("5 of 5 members assigned"));
        assert!(board.contains("Jamie Rivera"));
        assert!(board.contains("Project Management (min 4/5)"));
        assert!(!board.contains("Unassigned members"));
    }

    #[test]
    fn test_board_names_dangling_skills() {
        let mut state = sample_state();
        state.skills.remove(&SkillId::new("s4")).unwrap();
        let board = ConsoleFormatter::board(&state);
        assert!(board.contains("s4 (unknown skill)"));
    }

    #[test]
    fn test_members_lists_preferences_in_order() {
        let listing = ConsoleFormatter::members(&sample_state());
        assert!(listing.contains("Frontend Developer > UI/UX Designer"));
        assert!(listing.contains("[AJ]"));
    }

    #[test]
    fn test_change_mentions_side_effects() {
        let state = sample_state();
        let change = AssignmentChange {
            role: RoleId::new("r1"),
            member: Some(MemberId::new("m1")),
            displaced: Some(MemberId::new("m3")),
            vacated: Some(RoleId::new("r2")),
        };
        let text = ConsoleFormatter::change(&change, &state.allocation);
        assert!(text.contains("Alex Johnson now holds Project Lead"));
        assert!(text.contains("Jamie Rivera no longer holds it"));
        assert!(text.contains("Frontend Developer is now unfilled"));
    }

    #[test]
    fn test_issues_report() {
        colored::control::set_override(false);
        let summary = AllocationSummary {
            assigned_members: 1,
            total_members: 2,
            filled_roles: 0,
            total_roles: 1,
        };
        let issues = vec![AssignmentIssue::UnknownRole {
            member: MemberId::new("m1"),
            role: RoleId::new("r9"),
        }];
        let text = ConsoleFormatter::issues(&issues, &summary);
        assert!(text.contains("1 assignment issue(s)"));
        assert!(text.contains("member m1 holds unknown role r9"));

        let text = ConsoleFormatter::issues(&[], &summary);
        assert!(text.contains("consistent"));
    }
}
