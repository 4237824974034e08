//! Consistency checks for member↔role links.
//!
//! A consistent allocation has every link recorded on both sides, at most
//! one role per member and at most one member per role. The engine and the
//! reconciler always leave collections consistent; these checks exist for
//! imported data and for tests.

use crate::core::ids::{MemberId, RoleId};
use crate::team::{Role, TeamMember};
use std::collections::HashMap;
use std::fmt;

/// A detected inconsistency between members and roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentIssue {
    /// A role points at a member id that does not exist
    UnknownMember { role: RoleId, member: MemberId },
    /// A member points at a role id that does not exist
    UnknownRole { member: MemberId, role: RoleId },
    /// A role points at a member who does not point back
    OneSidedRole { role: RoleId, member: MemberId },
    /// A member points at a role that does not point back
    OneSidedMember { member: MemberId, role: RoleId },
    /// Several roles point at the same member
    MemberHeldTwice { member: MemberId, roles: Vec<RoleId> },
    /// Several members point at the same role
    RoleHeldTwice { role: RoleId, members: Vec<MemberId> },
}

impl fmt::Display for AssignmentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentIssue::UnknownMember { role, member } => {
                write!(f, "role {} is held by unknown member {}", role, member)
            }
            AssignmentIssue::UnknownRole { member, role } => {
                write!(f, "member {} holds unknown role {}", member, role)
            }
            AssignmentIssue::OneSidedRole { role, member } => {
                write!(f, "role {} names {} but the member does not hold it", role, member)
            }
            AssignmentIssue::OneSidedMember { member, role } => {
                write!(f, "member {} holds {} but the role names someone else", member, role)
            }
            AssignmentIssue::MemberHeldTwice { member, roles } => {
                write!(f, "member {} is named by {} roles", member, roles.len())
            }
            AssignmentIssue::RoleHeldTwice { role, members } => {
                write!(f, "role {} is held by {} members", role, members.len())
            }
        }
    }
}

/// Collect every inconsistency; empty means consistent
pub fn check_assignments(members: &[TeamMember], roles: &[Role]) -> Vec<AssignmentIssue> {
    let mut issues = Vec::new();

    let member_by_id: HashMap<&MemberId, &TeamMember> =
        members.iter().map(|m| (&m.id, m)).collect();
    let role_by_id: HashMap<&RoleId, &Role> = roles.iter().map(|r| (&r.id, r)).collect();

    let mut roles_per_member: HashMap<&MemberId, Vec<RoleId>> = HashMap::new();
    for role in roles {
        let Some(member_id) = &role.assigned_member_id else {
            continue;
        };
        roles_per_member
            .entry(member_id)
            .or_default()
            .push(role.id.clone());

        match member_by_id.get(member_id) {
            None => issues.push(AssignmentIssue::UnknownMember {
                role: role.id.clone(),
                member: member_id.clone(),
            }),
            Some(member) if member.assigned_role.as_ref() != Some(&role.id) => {
                issues.push(AssignmentIssue::OneSidedRole {
                    role: role.id.clone(),
                    member: member_id.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let mut members_per_role: HashMap<&RoleId, Vec<MemberId>> = HashMap::new();
    for member in members {
        let Some(role_id) = &member.assigned_role else {
            continue;
        };
        members_per_role
            .entry(role_id)
            .or_default()
            .push(member.id.clone());

        match role_by_id.get(role_id) {
            None => issues.push(AssignmentIssue::UnknownRole {
                member: member.id.clone(),
                role: role_id.clone(),
            }),
            Some(role) if role.assigned_member_id.as_ref() != Some(&member.id) => {
                issues.push(AssignmentIssue::OneSidedMember {
                    member: member.id.clone(),
                    role: role_id.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let mut doubled_members: Vec<_> = roles_per_member
        .into_iter()
        .filter(|(_, held)| held.len() > 1)
        .map(|(member, roles)| AssignmentIssue::MemberHeldTwice {
            member: member.clone(),
            roles,
        })
        .collect();
    let mut doubled_roles: Vec<_> = members_per_role
        .into_iter()
        .filter(|(_, held)| held.len() > 1)
        .map(|(role, members)| AssignmentIssue::RoleHeldTwice {
            role: role.clone(),
            members,
        })
        .collect();

    // HashMap order is arbitrary; keep reports stable
    doubled_members.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
    doubled_roles.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
    issues.extend(doubled_members);
    issues.extend(doubled_roles);

    issues
}

/// Whether the collections satisfy the two-sided link invariant
pub fn is_consistent(members: &[TeamMember], roles: &[Role]) -> bool {
    check_assignments(members, roles).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked() -> (Vec<TeamMember>, Vec<Role>) {
        let mut member = TeamMember::new("m1", "Alex");
        member.assigned_role = Some(RoleId::new("r1"));
        let mut role = Role::new("r1", "Lead", "");
        role.assigned_member_id = Some(MemberId::new("m1"));
        (vec![member, TeamMember::new("m2", "Sam")], vec![role, Role::new("r2", "Dev", "")])
    }

    #[test]
    fn test_consistent_links() {
        let (members, roles) = linked();
        assert!(is_consistent(&members, &roles));
    }

    #[test]
    fn test_unassigned_is_consistent() {
        assert!(is_consistent(
            &[TeamMember::new("m1", "Alex")],
            &[Role::new("r1", "Lead", "")]
        ));
        assert!(is_consistent(&[], &[]));
    }

    #[test]
    fn test_one_sided_role() {
        let (mut members, roles) = linked();
        members[0].assigned_role = None;
        assert_eq!(
            check_assignments(&members, &roles),
            vec![AssignmentIssue::OneSidedRole {
                role: RoleId::new("r1"),
                member: MemberId::new("m1"),
            }]
        );
    }

    #[test]
    fn test_unknown_references() {
        let (mut members, mut roles) = linked();
        members[1].assigned_role = Some(RoleId::new("ghost"));
        roles[1].assigned_member_id = Some(MemberId::new("nobody"));

        let issues = check_assignments(&members, &roles);
        assert!(issues.contains(&AssignmentIssue::UnknownMember {
            role: RoleId::new("r2"),
            member: MemberId::new("nobody"),
        }));
        assert!(issues.contains(&AssignmentIssue::UnknownRole {
            member: MemberId::new("m2"),
            role: RoleId::new("ghost"),
        }));
    }

    #[test]
    fn test_member_named_by_two_roles() {
        let (members, mut roles) = linked();
        roles[1].assigned_member_id = Some(MemberId::new("m1"));

        let issues = check_assignments(&members, &roles);
        assert!(issues.iter().any(|i| matches!(
            i,
            AssignmentIssue::MemberHeldTwice { roles, .. } if roles.len() == 2
        )));
        assert!(issues.contains(&AssignmentIssue::OneSidedRole {
            role: RoleId::new("r2"),
            member: MemberId::new("m1"),
        }));
    }

    #[test]
    fn test_display() {
        let issue = AssignmentIssue::UnknownRole {
            member: MemberId::new("m2"),
            role: RoleId::new("ghost"),
        };
        assert_eq!(issue.to_string(), "member m2 holds unknown role ghost");
    }
}
