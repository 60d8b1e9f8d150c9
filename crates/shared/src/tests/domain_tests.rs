use super::*;

#[test]
fn new_group_uses_first_option_of_each_attribute() {
    let group = FlowerGroup::new(GroupId(1));
    assert_eq!(group.quantity, 1);
    assert_eq!(group.flower_type, FlowerType::Roses);
    assert_eq!(group.color, FlowerColor::Red);
    assert_eq!(group.stem, StemColor::Green);
}

#[test]
fn option_sets_keep_menu_order() {
    let types: Vec<_> = FlowerType::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(
        types,
        ["Roses", "Tulips", "Bluebonnets", "Lilies", "Daisies"]
    );
    assert_eq!(FlowerColor::ALL.len(), 6);
    assert_eq!(StemColor::ALL.len(), 3);
}

#[test]
fn parses_options_case_and_spacing_insensitively() {
    assert_eq!("light green".parse::<StemColor>().unwrap(), StemColor::LightGreen);
    assert_eq!("Light_Green".parse::<StemColor>().unwrap(), StemColor::LightGreen);
    assert_eq!(" PURPLE ".parse::<FlowerColor>().unwrap(), FlowerColor::Purple);
    assert_eq!("bluebonnets".parse::<FlowerType>().unwrap(), FlowerType::Bluebonnets);
}

#[test]
fn rejects_unknown_option_with_its_kind() {
    let err = "Orchids".parse::<FlowerType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown flower type `Orchids`");
}

#[test]
fn parses_attribute_pairs() {
    assert_eq!(
        GroupAttribute::parse("color", "pink").unwrap(),
        GroupAttribute::Color(FlowerColor::Pink)
    );
    assert_eq!(
        GroupAttribute::parse("Type", "lilies").unwrap(),
        GroupAttribute::Type(FlowerType::Lilies)
    );
    assert!(matches!(
        GroupAttribute::parse("petals", "5"),
        Err(ParseOptionError::UnknownField(field)) if field == "petals"
    ));
}

#[test]
fn apply_touches_only_the_named_attribute() {
    let mut group = FlowerGroup::new(GroupId(3));
    group.apply(GroupAttribute::Stem(StemColor::Brown));
    assert_eq!(group.stem, StemColor::Brown);
    assert_eq!(group.flower_type, FlowerType::Roses);
    assert_eq!(group.quantity, 1);
}

#[test]
fn limit_label_names_the_cap() {
    assert_eq!(limit_reached_label(), "Limit Reached (15)");
    assert_eq!(GroupId(4).to_string(), "group-4");
}

#[test]
fn attribute_serializes_with_field_tag() {
    let json = serde_json::to_value(GroupAttribute::Stem(StemColor::LightGreen)).unwrap();
    assert_eq!(json, serde_json::json!({"field": "stem", "value": "light_green"}));
}
