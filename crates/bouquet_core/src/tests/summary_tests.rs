use super::*;
use shared::domain::{FlowerColor, FlowerType, GroupId, StemColor};

fn group(
    id: i64,
    quantity: u32,
    flower_type: FlowerType,
    color: FlowerColor,
    stem: StemColor,
) -> FlowerGroup {
    FlowerGroup {
        id: GroupId(id),
        quantity,
        flower_type,
        color,
        stem,
    }
}

#[test]
fn omits_empty_groups_and_keeps_creation_order() {
    let groups = vec![
        group(1, 3, FlowerType::Roses, FlowerColor::Red, StemColor::Green),
        group(2, 0, FlowerType::Tulips, FlowerColor::Blue, StemColor::Brown),
        group(3, 5, FlowerType::Lilies, FlowerColor::Pink, StemColor::LightGreen),
    ];

    let summary = summarize(&groups, "Kraft Paper", "");
    assert_eq!(summary.total_flowers, 8);
    assert_eq!(
        summary.display_lines(),
        vec![
            "3 x Red Roses (Stem Accent: Green)".to_string(),
            "5 x Pink Lilies (Stem Accent: Light Green)".to_string(),
        ]
    );
}

#[test]
fn all_zero_groups_render_placeholder() {
    let groups = vec![
        group(1, 0, FlowerType::Roses, FlowerColor::Red, StemColor::Green),
        group(2, 0, FlowerType::Daisies, FlowerColor::White, StemColor::Green),
    ];

    let summary = summarize(&groups, "Kraft Paper", "");
    assert_eq!(summary.total_flowers, 0);
    assert!(summary.line_items.is_empty());
    assert_eq!(summary.display_lines(), vec!["No flowers selected".to_string()]);
}

#[test]
fn blank_description_is_dropped_and_wrapping_echoed() {
    let summary = summarize(&[], "  Silk Ribbon ", " \n\t ");
    assert_eq!(summary.wrapping, "  Silk Ribbon ");
    assert_eq!(summary.description, None);
}

#[test]
fn description_is_kept_verbatim() {
    let summary = summarize(&[], "Burlap", "  bright and sunny ");
    assert_eq!(summary.description.as_deref(), Some("  bright and sunny "));
}

#[test]
fn total_flowers_saturates() {
    let groups = vec![
        group(1, u32::MAX, FlowerType::Roses, FlowerColor::Red, StemColor::Green),
        group(2, 1, FlowerType::Tulips, FlowerColor::Blue, StemColor::Brown),
    ];
    assert_eq!(summarize(&groups, "", "").total_flowers, u32::MAX);
}
