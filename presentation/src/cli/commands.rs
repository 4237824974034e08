//! CLI command definitions

use allocator_application::{MemberDraft, RoleDraft};
use allocator_domain::{AllocationMethod, RoleId, SkillId, SkillLevel, SkillRequirement};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for role-allocator
#[derive(Parser, Debug)]
#[command(name = "role-allocator")]
#[command(author, version, about = "Team Role Allocator - Match team members to roles")]
#[command(long_about = r#"
Role Allocator keeps a team of members and roles and decides who does what.

Allocation methods:
  skills       Greedy matching on skill match score (default)
  preferences  Members' preferred roles first, then fill in order
  random       Shuffle members and pair them with roles

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./allocator.toml       Project-level config
3. ~/.config/role-allocator/config.toml   Global config

Example:
  role-allocator init --sample
  role-allocator allocate --method preferences
  role-allocator assign r1 m3
  role-allocator score m1 r2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress notifications (command output is still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Team state file (overrides `storage.state_file`)
    #[arg(long, value_name = "PATH", global = true)]
    pub state: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new team state
    Init {
        /// Team name (defaults to `allocation.team_name`)
        #[arg(long)]
        name: Option<String>,

        /// Start from the sample team instead of an empty one
        #[arg(long)]
        sample: bool,

        /// Overwrite an existing team state
        #[arg(long)]
        force: bool,
    },

    /// Show the team board
    Show {
        /// Show members with their skills instead of the role board
        #[arg(long)]
        members: bool,
    },

    /// Re-allocate every role
    Allocate {
        /// Allocation method (defaults to `allocation.default_method`)
        #[arg(short, long, value_parser = parse_method)]
        method: Option<AllocationMethod>,

        /// Seed for the random method, for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Put a member into a role
    Assign {
        /// Role id
        role: String,
        /// Member id
        member: String,
    },

    /// Empty a role
    Unassign {
        /// Role id
        role: String,
    },

    /// Show skill match scores (one pair, or every pair ranked)
    Score {
        /// Member id
        #[arg(requires = "role")]
        member: Option<String>,
        /// Role id
        role: Option<String>,
    },

    /// Check that assignments are consistent on both sides
    Check,

    /// Add, remove or edit members
    Member {
        #[command(subcommand)]
        action: MemberCommand,
    },

    /// Add, edit or remove roles
    Role {
        #[command(subcommand)]
        action: RoleCommand,
    },

    /// Manage the skill catalog
    Skill {
        #[command(subcommand)]
        action: SkillCommand,
    },

    /// Rename the team
    Rename {
        name: String,
    },

    /// Replace the team with an exchange file
    Import {
        path: PathBuf,
    },

    /// Write the team to `team-allocation-YYYY-MM-DD.json`
    Export {
        /// Target directory (defaults to `storage.export_dir`)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show configuration file locations and effective settings
    ShowConfig,
}

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    /// Add a member
    Add(MemberArgs),

    /// Replace a member's details (the assignment is kept)
    Edit {
        /// Member id
        id: String,
        #[command(flatten)]
        details: MemberArgs,
    },

    /// Remove a member (their role becomes unfilled)
    Remove {
        /// Member id
        id: String,
    },

    /// Set a member's preferred roles, most preferred first
    Prefer {
        /// Member id
        id: String,
        /// Role ids
        roles: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct MemberArgs {
    /// Display name
    pub name: String,

    /// Skill and level, e.g. `s1=4` (repeatable)
    #[arg(short, long = "skill", value_parser = parse_skill_arg)]
    pub skills: Vec<SkillArg>,

    /// Preferred role id (repeatable, most preferred first)
    #[arg(short, long = "prefer")]
    pub prefer: Vec<String>,

    /// Avatar URL
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Add a role
    Add(RoleArgs),

    /// Replace a role's details (the assignment is kept)
    Edit {
        /// Role id
        id: String,
        #[command(flatten)]
        details: RoleArgs,
    },

    /// Remove a role (its member becomes unassigned)
    Remove {
        /// Role id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct RoleArgs {
    /// Display name
    pub name: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Required skill, optionally with a minimum level: `s1` or `s1=3` (repeatable)
    #[arg(short, long = "requires", value_parser = parse_requirement_arg)]
    pub requires: Vec<RequirementArg>,

    /// Display color, e.g. `#0EA5E9`
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Add a skill to the catalog
    Add { name: String },
    /// Rename a skill
    Rename { id: String, name: String },
    /// Remove a skill (members and roles keep their references)
    Remove { id: String },
    /// List the catalog
    List,
}

/// `skill=level` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillArg {
    pub skill: SkillId,
    pub level: SkillLevel,
}

/// `skill` or `skill=min_level` from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementArg {
    pub skill: SkillId,
    pub min_level: Option<SkillLevel>,
}

impl MemberArgs {
    pub fn into_draft(self) -> MemberDraft {
        MemberDraft {
            name: self.name,
            skills: self.skills.into_iter().map(|s| (s.skill, s.level)).collect(),
            preferred_roles: self.prefer.into_iter().map(RoleId::from).collect(),
            avatar: self.avatar,
        }
    }
}

impl RoleArgs {
    pub fn into_draft(self) -> RoleDraft {
        RoleDraft {
            name: self.name,
            description: self.description,
            requirements: self
                .requires
                .into_iter()
                .map(|r| SkillRequirement {
                    skill_id: r.skill,
                    min_level: r.min_level,
                })
                .collect(),
            color: self.color,
        }
    }
}

fn parse_method(s: &str) -> Result<AllocationMethod, String> {
    s.parse()
}

fn parse_level(s: &str) -> Result<SkillLevel, String> {
    let value: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a skill level (1-5)", s))?;
    SkillLevel::try_new(value).map_err(|e| e.to_string())
}

fn parse_skill_arg(s: &str) -> Result<SkillArg, String> {
    let (skill, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SKILL=LEVEL, got '{}'", s))?;
    Ok(SkillArg {
        skill: SkillId::new(skill.trim()),
        level: parse_level(level)?,
    })
}

fn parse_requirement_arg(s: &str) -> Result<RequirementArg, String> {
    match s.split_once('=') {
        Some((skill, level)) => Ok(RequirementArg {
            skill: SkillId::new(skill.trim()),
            min_level: Some(parse_level(level)?),
        }),
        None => Ok(RequirementArg {
            skill: SkillId::new(s.trim()),
            min_level: None,
        }),
    }
}
