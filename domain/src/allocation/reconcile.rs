//! Manual assignment reconciliation
//!
//! Applies a single `(role, member | none)` request, such as a drag-and-drop
//! or an `assign` command, without re-running the engine. The member↔role
//! links stay two-sided afterwards:
//!
//! 1. whoever held the role loses it
//! 2. the incoming member (if any) takes the role
//! 3. the role records the incoming member (or becomes empty)
//! 4. any other role the incoming member held is vacated
//!
//! Steps run in order, so repeating a request is a no-op.

use crate::core::ids::{MemberId, RoleId};
use crate::team::{Role, TeamMember};

/// Apply an assignment request to the given collections in place
pub fn apply_assignment(
    members: &mut [TeamMember],
    roles: &mut [Role],
    role_id: &RoleId,
    member_id: Option<&MemberId>,
) {
    for member in members.iter_mut() {
        if member.assigned_role.as_ref() == Some(role_id) {
            member.assigned_role = None;
        }
    }

    if let Some(member_id) = member_id {
        for member in members.iter_mut().filter(|m| &m.id == member_id) {
            member.assigned_role = Some(role_id.clone());
        }
    }

    for role in roles.iter_mut() {
        if &role.id == role_id {
            role.assigned_member_id = member_id.cloned();
        } else if member_id.is_some() && role.assigned_member_id.as_ref() == member_id {
            role.assigned_member_id = None;
        }
    }
}

/// Copying variant of [`apply_assignment`]
pub fn set_assignment(
    members: &[TeamMember],
    roles: &[Role],
    role_id: &RoleId,
    member_id: Option<&MemberId>,
) -> (Vec<TeamMember>, Vec<Role>) {
    let mut members = members.to_vec();
    let mut roles = roles.to_vec();
    apply_assignment(&mut members, &mut roles, role_id, member_id);
    (members, roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::engine::allocate;
    use crate::allocation::invariant::check_assignments;
    use crate::allocation::method::AllocationMethod;

    fn team() -> (Vec<TeamMember>, Vec<Role>) {
        let members = vec![
            TeamMember::new("m1", "Alex"),
            TeamMember::new("m2", "Sam"),
            TeamMember::new("m3", "Jordan"),
        ];
        let roles = vec![
            Role::new("r1", "Lead", ""),
            Role::new("r2", "Dev", ""),
            Role::new("r3", "QA", ""),
        ];
        (members, roles)
    }

    fn assign(
        members: &[TeamMember],
        roles: &[Role],
        role: &str,
        member: Option<&str>,
    ) -> (Vec<TeamMember>, Vec<Role>) {
        let member = member.map(MemberId::from);
        set_assignment(members, roles, &RoleId::new(role), member.as_ref())
    }

    fn role_of<'a>(members: &'a [TeamMember], id: &str) -> Option<&'a str> {
        members
            .iter()
            .find(|m| m.id.as_str() == id)
            .and_then(|m| m.assigned_role.as_ref())
            .map(|r| r.as_str())
    }

    fn holder<'a>(roles: &'a [Role], id: &str) -> Option<&'a str> {
        roles
            .iter()
            .find(|r| r.id.as_str() == id)
            .and_then(|r| r.assigned_member_id.as_ref())
            .map(|m| m.as_str())
    }

    #[test]
    fn test_assign_to_empty_role() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r1", Some("m1"));

        assert_eq!(role_of(&members, "m1"), Some("r1"));
        assert_eq!(holder(&roles, "r1"), Some("m1"));
        assert!(check_assignments(&members, &roles).is_empty());
    }

    #[test]
    fn test_moving_member_vacates_old_role() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r2", Some("m1"));
        let (members, roles) = assign(&members, &roles, "r1", Some("m1"));

        assert_eq!(holder(&roles, "r2"), None);
        assert_eq!(holder(&roles, "r1"), Some("m1"));
        assert_eq!(role_of(&members, "m1"), Some("r1"));
        assert!(check_assignments(&members, &roles).is_empty());
    }

    #[test]
    fn test_replacing_holder_unassigns_previous_member() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r1", Some("m1"));
        let (members, roles) = assign(&members, &roles, "r1", Some("m2"));

        assert_eq!(role_of(&members, "m1"), None);
        assert_eq!(role_of(&members, "m2"), Some("r1"));
        assert_eq!(holder(&roles, "r1"), Some("m2"));
        assert!(check_assignments(&members, &roles).is_empty());
    }

    #[test]
    fn test_unassign_clears_both_sides() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r1", Some("m1"));
        let (members, roles) = assign(&members, &roles, "r1", None);

        assert_eq!(holder(&roles, "r1"), None);
        assert_eq!(role_of(&members, "m1"), None);
        assert!(check_assignments(&members, &roles).is_empty());
    }

    #[test]
    fn test_unassign_leaves_other_roles_alone() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r1", Some("m1"));
        let (members, roles) = assign(&members, &roles, "r2", Some("m2"));
        let (members, roles) = assign(&members, &roles, "r1", None);

        assert_eq!(holder(&roles, "r2"), Some("m2"));
        assert_eq!(role_of(&members, "m2"), Some("r2"));
    }

    #[test]
    fn test_reassigning_same_pair_is_idempotent() {
        let (members, roles) = team();
        let once = assign(&members, &roles, "r1", Some("m1"));
        let twice = assign(&once.0, &once.1, "r1", Some("m1"));

        assert_eq!(once, twice);
        assert_eq!(role_of(&twice.0, "m1"), Some("r1"));
        assert_eq!(holder(&twice.1, "r1"), Some("m1"));
    }

    #[test]
    fn test_unassign_is_idempotent() {
        let (members, roles) = team();
        let (members, roles) = assign(&members, &roles, "r3", Some("m3"));
        let once = assign(&members, &roles, "r3", None);
        let twice = assign(&once.0, &once.1, "r3", None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_swap_after_engine_run_keeps_invariant() {
        let members = crate::team::seed::sample_members();
        let roles = crate::team::seed::default_roles();
        let result = allocate(&members, &roles, AllocationMethod::Skills);

        // m1 holds r2 and m4 holds r4; drag m1 onto r4
        let (members, roles) = assign(&result.members, &result.roles, "r4", Some("m1"));
        assert_eq!(holder(&roles, "r4"), Some("m1"));
        assert_eq!(holder(&roles, "r2"), None);
        assert_eq!(role_of(&members, "m4"), None);
        assert!(check_assignments(&members, &roles).is_empty());
    }
}
