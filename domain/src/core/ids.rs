//! Identifier value objects.
//!
//! All identifiers are opaque strings on the wire. Freshly generated ids are
//! short (9 lowercase hex chars) so they stay readable in CLI output and
//! exported files.

use serde::{Deserialize, Serialize};

const GENERATED_ID_LEN: usize = 9;

fn short_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(GENERATED_ID_LEN);
    id
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the id from an existing string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a new random id.
            pub fn generate() -> Self {
                Self(short_id())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a skill in the skill catalog.
    SkillId
);

string_id!(
    /// Identifier of a team member.
    MemberId
);

string_id!(
    /// Identifier of a role.
    RoleId
);

string_id!(
    /// Identifier of a team allocation aggregate.
    AllocationId
);
