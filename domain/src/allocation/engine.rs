//! Allocation engine
//!
//! Produces a full reassignment of members to roles. Every run starts from a
//! clean slate: prior `assigned_role` / `assigned_member_id` values are
//! discarded whatever the method.
//!
//! The engine works on copies. Only the assignment fields of the returned
//! members and roles differ from the input; order and all other fields pass
//! through unchanged.
//!
//! # Methods
//!
//! ```text
//! random       shuffle(members) ─ zip ─ roles
//!
//! preferences  pass 1: member order × preference order → first free role
//!              pass 2: leftover members ─ zip ─ leftover roles
//!
//! skills       score every (member, role) ─ stable sort desc ─ greedy claim
//! ```
//!
//! The skills method is greedy. It can miss the assignment with the best
//! total score; that is expected.

use super::method::AllocationMethod;
use super::scoring::skill_match_score;
use crate::team::{Role, TeamMember};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A scored (member, role) pairing, by position in the input slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPair {
    pub member: usize,
    pub role: usize,
    pub score: u8,
}

/// What an allocation run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    pub method: AllocationMethod,
    /// Number of member/role pairs made
    pub assigned: usize,
    pub unassigned_members: usize,
    pub unfilled_roles: usize,
}

impl AllocationReport {
    /// One-line description suitable for a user notification
    pub fn message(&self) -> String {
        format!(
            "Team roles have been assigned using {}-based allocation",
            self.method
        )
    }
}

/// Result of [`allocate`]: the reassigned collections plus a report
#[derive(Debug, Clone)]
pub struct Allocation {
    pub members: Vec<TeamMember>,
    pub roles: Vec<Role>,
    pub report: AllocationReport,
}

/// Allocate roles using the thread-local RNG for the random method
pub fn allocate(members: &[TeamMember], roles: &[Role], method: AllocationMethod) -> Allocation {
    allocate_with_rng(members, roles, method, &mut rand::thread_rng())
}

/// Allocate roles with an explicit RNG.
///
/// The RNG is only consumed by [`AllocationMethod::Random`]; pass a seeded
/// generator for reproducible shuffles.
pub fn allocate_with_rng<R: Rng + ?Sized>(
    members: &[TeamMember],
    roles: &[Role],
    method: AllocationMethod,
    rng: &mut R,
) -> Allocation {
    let mut members = members.to_vec();
    let mut roles = roles.to_vec();

    for member in &mut members {
        member.assigned_role = None;
    }
    for role in &mut roles {
        role.assigned_member_id = None;
    }

    let pairs = match method {
        AllocationMethod::Random => random_pairs(members.len(), roles.len(), rng),
        AllocationMethod::Preferences => preference_pairs(&members, &roles),
        AllocationMethod::Skills => skill_pairs(&members, &roles),
    };

    for &(m, r) in &pairs {
        members[m].assigned_role = Some(roles[r].id.clone());
        roles[r].assigned_member_id = Some(members[m].id.clone());
    }

    let report = AllocationReport {
        method,
        assigned: pairs.len(),
        unassigned_members: members.len() - pairs.len(),
        unfilled_roles: roles.len() - pairs.len(),
    };

    Allocation {
        members,
        roles,
        report,
    }
}

/// Every (member, role) pair with its score, best first.
///
/// Pairs are enumerated member-major (members in list order, roles in list
/// order within each member) and then stably sorted by score descending, so
/// equal scores keep enumeration order. The skills method claims pairs in
/// exactly this order.
pub fn rank_pairs(members: &[TeamMember], roles: &[Role]) -> Vec<ScoredPair> {
    let mut pairs: Vec<ScoredPair> = members
        .iter()
        .enumerate()
        .flat_map(|(m, member)| {
            roles.iter().enumerate().map(move |(r, role)| ScoredPair {
                member: m,
                role: r,
                score: skill_match_score(member, role),
            })
        })
        .collect();

    // sort_by is stable
    pairs.sort_by(|a, b| b.score.cmp(&a.score));
    pairs
}

fn random_pairs<R: Rng + ?Sized>(
    member_count: usize,
    role_count: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..member_count).collect();
    order.shuffle(rng);
    order.into_iter().zip(0..role_count).collect()
}

fn preference_pairs(members: &[TeamMember], roles: &[Role]) -> Vec<(usize, usize)> {
    let mut open_roles: Vec<usize> = (0..roles.len()).collect();
    let mut placed = vec![false; members.len()];
    let mut pairs = Vec::new();

    // Pass 1: honour preferences in member order
    for (m, member) in members.iter().enumerate() {
        let choice = member.preferred_roles.iter().find_map(|wanted| {
            open_roles
                .iter()
                .position(|&r| &roles[r].id == wanted)
        });

        if let Some(slot) = choice {
            let r = open_roles.remove(slot);
            pairs.push((m, r));
            placed[m] = true;
        }
    }

    // Pass 2: positional fill of whatever is left
    let leftover = (0..members.len()).filter(|&m| !placed[m]);
    pairs.extend(leftover.zip(open_roles));
    pairs
}

fn skill_pairs(members: &[TeamMember], roles: &[Role]) -> Vec<(usize, usize)> {
    let mut member_taken = vec![false; members.len()];
    let mut role_taken = vec![false; roles.len()];
    let mut pairs = Vec::new();

    for pair in rank_pairs(members, roles) {
        if member_taken[pair.member] || role_taken[pair.role] {
            continue;
        }
        member_taken[pair.member] = true;
        role_taken[pair.role] = true;
        pairs.push((pair.member, pair.role));
    }

    pairs
}
