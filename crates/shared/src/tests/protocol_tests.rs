use super::*;

fn roses() -> LineItem {
    LineItem {
        quantity: 3,
        flower_type: FlowerType::Roses,
        color: FlowerColor::Red,
        stem: StemColor::LightGreen,
    }
}

#[test]
fn line_item_renders_quantity_color_type_and_stem() {
    assert_eq!(roses().to_string(), "3 x Red Roses (Stem Accent: Light Green)");
}

#[test]
fn empty_summary_uses_placeholder_line() {
    let summary = BouquetSummary {
        total_flowers: 0,
        line_items: Vec::new(),
        wrapping: "Kraft Paper".to_string(),
        description: None,
    };
    assert_eq!(summary.display_lines(), vec!["No flowers selected".to_string()]);
    let text = summary.to_string();
    assert!(text.contains("Total Flowers: 0"));
    assert!(!text.contains("Personal Vision"));
}

#[test]
fn summary_text_includes_description_when_present() {
    let summary = BouquetSummary {
        total_flowers: 3,
        line_items: vec![roses()],
        wrapping: "Silk Ribbon".to_string(),
        description: Some("for grandma".to_string()),
    };
    let text = summary.to_string();
    assert!(text.starts_with("Flower Components:\n  3 x Red Roses"));
    assert!(text.contains("Bouquet Wrapping: Silk Ribbon"));
    assert!(text.ends_with("Personal Vision: for grandma"));
}

#[test]
fn input_events_use_tagged_wire_shape() {
    let input = BouquetInput::QuantityChanged {
        group_id: GroupId(2),
        raw: "7".to_string(),
    };
    let json = serde_json::to_value(&input).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"type": "quantity_changed", "payload": {"group_id": 2, "raw": "7"}})
    );
    let back: BouquetInput = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, input);
}

#[test]
fn summary_omits_missing_description_on_the_wire() {
    let summary = BouquetSummary {
        total_flowers: 0,
        line_items: Vec::new(),
        wrapping: String::new(),
        description: None,
    };
    let json = serde_json::to_value(&summary).expect("serialize");
    assert!(json.get("description").is_none());
}
