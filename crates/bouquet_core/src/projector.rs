use shared::{
    domain::{limit_reached_label, ADD_GROUP_LABEL, CAP},
    protocol::{AddButtonState, TotalDisplay, TotalEmphasis, UiState},
};

/// Derives every affordance from the settled total.
///
/// A full bouquet is only highlighted; proceeding stays enabled at any total.
pub fn project(new_total: u32, was_capped: bool) -> UiState {
    let full = new_total >= CAP;
    UiState {
        total: new_total,
        total_display: TotalDisplay {
            text: new_total.to_string(),
            emphasis: if new_total == CAP {
                TotalEmphasis::Highlighted
            } else {
                TotalEmphasis::Normal
            },
        },
        add_button: AddButtonState {
            enabled: !full,
            label: if full {
                limit_reached_label()
            } else {
                ADD_GROUP_LABEL.to_string()
            },
        },
        proceed_enabled: true,
        show_notice: was_capped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bouquet_disables_add_and_highlights_total() {
        let state = project(15, true);
        assert_eq!(state.total_display.text, "15");
        assert_eq!(state.total_display.emphasis, TotalEmphasis::Highlighted);
        assert!(!state.add_button.enabled);
        assert_eq!(state.add_button.label, "Limit Reached (15)");
        assert!(state.proceed_enabled);
        assert!(state.show_notice);
    }

    #[test]
    fn below_cap_keeps_add_enabled() {
        let state = project(14, false);
        assert_eq!(state.total_display.emphasis, TotalEmphasis::Normal);
        assert!(state.add_button.enabled);
        assert_eq!(state.add_button.label, "+ Add Flower Type");
        assert!(!state.show_notice);
    }

    #[test]
    fn over_cap_total_still_disables_add_without_highlight() {
        let state = project(16, false);
        assert!(!state.add_button.enabled);
        assert_eq!(state.total_display.emphasis, TotalEmphasis::Normal);
        assert!(state.proceed_enabled);
    }

    #[test]
    fn empty_bouquet_can_still_proceed() {
        let state = project(0, false);
        assert_eq!(state.total_display.text, "0");
        assert!(state.proceed_enabled);
    }
}
