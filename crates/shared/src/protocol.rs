use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        FlowerColor, FlowerType, GroupAttribute, GroupId, Page, StemColor, NO_FLOWERS_PLACEHOLDER,
    },
    error::Recovery,
};

/// Events the presentation layer routes into a bouquet session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BouquetInput {
    Start,
    GroupAdded,
    GroupRemoved {
        group_id: GroupId,
    },
    QuantityChanged {
        group_id: GroupId,
        raw: String,
    },
    AttributeChanged {
        group_id: GroupId,
        attribute: GroupAttribute,
    },
    WrappingChanged {
        wrapping: String,
    },
    DescriptionChanged {
        description: String,
    },
    ProceedToSummary,
    ReturnToStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalEmphasis {
    Normal,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDisplay {
    pub text: String,
    pub emphasis: TotalEmphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddButtonState {
    pub enabled: bool,
    pub label: String,
}

/// Affordances derived from the latest allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub total: u32,
    pub total_display: TotalDisplay,
    pub add_button: AddButtonState,
    pub proceed_enabled: bool,
    pub show_notice: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u32,
    pub flower_type: FlowerType,
    pub color: FlowerColor,
    pub stem: StemColor,
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} {} (Stem Accent: {})",
            self.quantity, self.color, self.flower_type, self.stem
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetSummary {
    pub total_flowers: u32,
    pub line_items: Vec<LineItem>,
    pub wrapping: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BouquetSummary {
    /// Rendered line items, or the placeholder line when nothing was picked.
    pub fn display_lines(&self) -> Vec<String> {
        if self.line_items.is_empty() {
            vec![NO_FLOWERS_PLACEHOLDER.to_string()]
        } else {
            self.line_items.iter().map(ToString::to_string).collect()
        }
    }
}

impl fmt::Display for BouquetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flower Components:")?;
        for line in self.display_lines() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "Total Flowers: {}", self.total_flowers)?;
        write!(f, "Bouquet Wrapping: {}", self.wrapping)?;
        if let Some(description) = &self.description {
            write!(f, "\nPersonal Vision: {description}")?;
        }
        Ok(())
    }
}

/// Signals a session emits for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BouquetSignal {
    PageChanged { page: Page },
    GroupCreated { group_id: GroupId },
    GroupDeleted { group_id: GroupId },
    QuantitySettled { group_id: GroupId, quantity: u32 },
    StateUpdated(UiState),
    NoticeShown { duration_ms: u64 },
    NoticeHidden,
    Recovered(Recovery),
    SummaryReady(BouquetSummary),
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
