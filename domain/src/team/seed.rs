//! Starter data for a new workspace (`init --sample`)

use super::allocation::TeamAllocation;
use super::member::TeamMember;
use super::role::Role;
use crate::skill::{Skill, SkillCatalog, SkillLevel};

fn level(value: u8) -> SkillLevel {
    // Literals below are all in 1..=5
    SkillLevel::try_new(value).unwrap_or(SkillLevel::BEGINNER)
}

pub fn default_skills() -> SkillCatalog {
    SkillCatalog::new(vec![
        Skill::new("s1", "Frontend Development"),
        Skill::new("s2", "Backend Development"),
        Skill::new("s3", "UI/UX Design"),
        Skill::new("s4", "Project Management"),
        Skill::new("s5", "Data Analysis"),
        Skill::new("s6", "Content Writing"),
        Skill::new("s7", "QA Testing"),
        Skill::new("s8", "DevOps"),
    ])
}

pub fn default_roles() -> Vec<Role> {
    vec![
        Role::new(
            "r1",
            "Project Lead",
            "Oversees the entire project and coordinates team efforts",
        )
        .with_requirement("s4", Some(level(4)))
        .with_color("#8B5CF6"),
        Role::new(
            "r2",
            "Frontend Developer",
            "Creates and maintains the user interface of the application",
        )
        .with_requirement("s1", Some(level(3)))
        .with_color("#0EA5E9"),
        Role::new(
            "r3",
            "Backend Developer",
            "Develops and maintains server-side logic",
        )
        .with_requirement("s2", Some(level(3)))
        .with_color("#10B981"),
        Role::new("r4", "UI/UX Designer", "Designs user interfaces and experiences")
            .with_requirement("s3", Some(level(3)))
            .with_color("#F59E0B"),
        Role::new("r5", "QA Engineer", "Tests and ensures quality of the application")
            .with_requirement("s7", Some(level(3)))
            .with_color("#EF4444"),
    ]
}

pub fn sample_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("m1", "Alex Johnson")
            .with_skill("s1", level(4))
            .with_skill("s3", level(3))
            .with_skill("s7", level(2))
            .with_preference("r2")
            .with_preference("r4"),
        TeamMember::new("m2", "Sam Martinez")
            .with_skill("s2", level(5))
            .with_skill("s8", level(4))
            .with_skill("s7", level(3))
            .with_preference("r3")
            .with_preference("r5"),
        TeamMember::new("m3", "Jamie Rivera")
            .with_skill("s4", level(5))
            .with_skill("s6", level(4))
            .with_skill("s5", level(3))
            .with_preference("r1"),
        TeamMember::new("m4", "Taylor Kim")
            .with_skill("s3", level(5))
            .with_skill("s1", level(3))
            .with_skill("s6", level(4))
            .with_preference("r4")
            .with_preference("r2"),
        TeamMember::new("m5", "Jordan Patel")
            .with_skill("s2", level(4))
            .with_skill("s8", level(5))
            .with_skill("s5", level(3))
            .with_preference("r3"),
    ]
}

/// Sample team with default roles, nobody assigned yet
pub fn sample_allocation(name: impl Into<String>) -> TeamAllocation {
    TeamAllocation::new(name)
        .with_members(sample_members())
        .with_roles(default_roles())
}
