//! Quantity allocation under the bouquet-wide cap.
//!
//! Only the quantity being edited is ever rewritten. Other groups keep the
//! values the user typed into them.

use serde::{Deserialize, Serialize};
use shared::domain::{FlowerGroup, CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub final_value: u32,
    pub was_capped: bool,
    pub new_total: u32,
}

/// Settles one group's requested quantity against the rest of the bouquet.
///
/// `other_groups_total` is the sum over every group except the edited one.
/// A request above the remaining capacity is cut to that capacity, floored at
/// zero when the other groups already exceed the cap.
pub fn allocate(other_groups_total: u32, requested: u32) -> Allocation {
    let remaining = i64::from(CAP) - i64::from(other_groups_total);
    let (final_value, was_capped) = if i64::from(requested) > remaining {
        (u32::try_from(remaining.max(0)).unwrap_or(0), true)
    } else {
        (requested, false)
    };

    Allocation {
        final_value,
        was_capped,
        new_total: other_groups_total.saturating_add(final_value),
    }
}

/// Total with no active edit, e.g. after a removal. Never clamps.
pub fn recompute(groups: &[FlowerGroup]) -> u32 {
    groups
        .iter()
        .map(|group| group.quantity)
        .fold(0, u32::saturating_add)
}

/// Reads the leading integer of `raw`.
///
/// Returns `None` when no digits lead the text. Negative numbers read as 0 and
/// values past `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<u32> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .collect();
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }

    Some(digits.into_iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit)
    }))
}

#[cfg(test)]
#[path = "tests/allocator_tests.rs"]
mod tests;
