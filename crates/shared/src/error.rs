use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::GroupId;

/// Failure to map presentation-layer text onto one of the closed option sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    #[error("unknown {kind} `{value}`")]
    UnknownOption { kind: &'static str, value: String },
    #[error("unknown group field `{0}` (expected type, color or stem)")]
    UnknownField(String),
}

/// Conditions the session recovers from locally; none of them ends an edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recovery {
    #[error("{group_id}: requested {requested}, only {granted} fit under the cap")]
    CapExceeded {
        group_id: GroupId,
        requested: u32,
        granted: u32,
    },
    #[error("{group_id}: `{raw}` is not a quantity, treated as 0")]
    InvalidNumericInput { group_id: GroupId, raw: String },
    #[error("{group_id} is not in the bouquet")]
    RemoveUnknownGroup { group_id: GroupId },
}

impl Recovery {
    /// Only a clamp is shown to the user.
    pub fn shows_notice(&self) -> bool {
        matches!(self, Self::CapExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cap_exceeded_shows_a_notice() {
        let group_id = GroupId(1);
        assert!(Recovery::CapExceeded {
            group_id,
            requested: 20,
            granted: 15,
        }
        .shows_notice());
        assert!(!Recovery::InvalidNumericInput {
            group_id,
            raw: "abc".to_string(),
        }
        .shows_notice());
        assert!(!Recovery::RemoveUnknownGroup { group_id }.shows_notice());
    }

    #[test]
    fn recovery_messages_name_the_group() {
        let recovery = Recovery::CapExceeded {
            group_id: GroupId(2),
            requested: 7,
            granted: 5,
        };
        assert_eq!(
            recovery.to_string(),
            "group-2: requested 7, only 5 fit under the cap"
        );
    }
}
