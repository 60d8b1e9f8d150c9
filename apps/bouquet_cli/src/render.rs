use shared::{
    domain::{FlowerGroup, CAP},
    protocol::{BouquetSignal, TotalEmphasis},
};

use crate::config::OutputFormat;

/// Formats one signal for stdout. Diagnostic-only signals print nothing in text mode.
pub fn render_signal(
    signal: &BouquetSignal,
    format: OutputFormat,
) -> anyhow::Result<Option<String>> {
    if format == OutputFormat::Json {
        return Ok(Some(serde_json::to_string(signal)?));
    }

    let text = match signal {
        BouquetSignal::PageChanged { page } => format!("== {page:?} =="),
        BouquetSignal::GroupCreated { group_id } => format!("added flower group #{}", group_id.0),
        BouquetSignal::GroupDeleted { group_id } => format!("removed flower group #{}", group_id.0),
        BouquetSignal::QuantitySettled { group_id, quantity } => {
            format!("group #{} quantity: {quantity}", group_id.0)
        }
        BouquetSignal::StateUpdated(ui) => {
            let total = match ui.total_display.emphasis {
                TotalEmphasis::Highlighted => format!("*{}*", ui.total_display.text),
                TotalEmphasis::Normal => ui.total_display.text.clone(),
            };
            let add = if ui.add_button.enabled {
                ui.add_button.label.clone()
            } else {
                format!("{} [disabled]", ui.add_button.label)
            };
            format!("total: {total}/{CAP} | {add}")
        }
        BouquetSignal::NoticeShown { .. } => {
            format!("! A bouquet holds at most {CAP} flowers; the quantity was reduced.")
        }
        BouquetSignal::NoticeHidden => "(notice dismissed)".to_string(),
        BouquetSignal::Recovered(_) => return Ok(None),
        BouquetSignal::SummaryReady(summary) => summary.to_string(),
    };
    Ok(Some(text))
}

/// Lists the groups and free-text fields as currently entered.
pub fn render_draft(groups: &[FlowerGroup], wrapping: &str, description: &str) -> String {
    let mut lines: Vec<String> = groups
        .iter()
        .map(|group| {
            format!(
                "#{:<3} qty {:>2}  {} / {} / stem {}",
                group.id.0, group.quantity, group.flower_type, group.color, group.stem
            )
        })
        .collect();
    if lines.is_empty() {
        lines.push("no flower groups yet".to_string());
    }
    lines.push(format!("wrapping: {wrapping}"));
    if !description.trim().is_empty() {
        lines.push(format!("vision: {description}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouquet_core::project;
    use shared::{domain::GroupId, error::Recovery};

    #[test]
    fn full_total_is_emphasized_and_add_marked_disabled() {
        let signal = BouquetSignal::StateUpdated(project(15, true));
        let line = render_signal(&signal, OutputFormat::Text)
            .expect("render")
            .expect("line");
        assert_eq!(line, "total: *15*/15 | Limit Reached (15) [disabled]");
    }

    #[test]
    fn recoveries_are_silent_in_text_mode() {
        let signal = BouquetSignal::Recovered(Recovery::RemoveUnknownGroup {
            group_id: GroupId(9),
        });
        assert_eq!(render_signal(&signal, OutputFormat::Text).expect("render"), None);
        assert!(render_signal(&signal, OutputFormat::Json)
            .expect("render")
            .expect("line")
            .contains("remove_unknown_group"));
    }

    #[test]
    fn draft_lists_groups_in_order_then_free_text() {
        let mut groups = vec![FlowerGroup::new(GroupId(1)), FlowerGroup::new(GroupId(2))];
        groups[1].quantity = 12;
        let text = render_draft(&groups, "Burlap", "sunflowers next time");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("qty 12"));
        assert_eq!(lines[2], "wrapping: Burlap");
        assert_eq!(lines[3], "vision: sunflowers next time");
    }

    #[test]
    fn empty_draft_skips_blank_description() {
        let text = render_draft(&[], "Burlap", "  ");
        assert_eq!(text, "no flower groups yet\nwrapping: Burlap");
    }
}
