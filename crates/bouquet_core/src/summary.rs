use shared::{
    domain::FlowerGroup,
    protocol::{BouquetSummary, LineItem},
};

/// Builds the final summary from a snapshot of the groups.
///
/// Zero-quantity groups are left out of the line items. The description is
/// kept verbatim, and only when it has non-whitespace content.
pub fn summarize(groups: &[FlowerGroup], wrapping: &str, description: &str) -> BouquetSummary {
    let line_items = groups
        .iter()
        .filter(|group| group.quantity > 0)
        .map(|group| LineItem {
            quantity: group.quantity,
            flower_type: group.flower_type,
            color: group.color,
            stem: group.stem,
        })
        .collect();

    BouquetSummary {
        total_flowers: groups
            .iter()
            .map(|group| group.quantity)
            .fold(0, u32::saturating_add),
        line_items,
        wrapping: wrapping.to_string(),
        description: (!description.trim().is_empty()).then(|| description.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
