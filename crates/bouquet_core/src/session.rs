use shared::{
    domain::{FlowerGroup, GroupAttribute, GroupId, Page, NOTICE_DURATION},
    error::Recovery,
    protocol::{BouquetInput, BouquetSignal, BouquetSummary, UiState},
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    allocator::{self, Allocation},
    notice::NoticeTimer,
    projector,
    store::GroupStore,
    summary,
};

const SIGNAL_CHANNEL_CAPACITY: usize = 256;

/// One interactive bouquet-building session.
///
/// Input events are applied to completion one at a time; every resulting
/// signal is broadcast to subscribers. Clamping requires a Tokio runtime for
/// the notice timer.
pub struct BouquetSession {
    store: GroupStore,
    page: Page,
    wrapping: String,
    description: String,
    ui: UiState,
    notice: NoticeTimer,
    events: broadcast::Sender<BouquetSignal>,
}

impl Default for BouquetSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BouquetSession {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(SIGNAL_CHANNEL_CAPACITY);
        Self {
            store: GroupStore::new(),
            page: Page::Start,
            wrapping: String::new(),
            description: String::new(),
            ui: projector::project(0, false),
            notice: NoticeTimer::new(NOTICE_DURATION, events.clone()),
            events,
        }
    }

    /// Session whose wrapping starts at a preselected value.
    pub fn with_wrapping(wrapping: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.wrapping = wrapping.into();
        session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BouquetSignal> {
        self.events.subscribe()
    }

    pub fn handle(&mut self, input: BouquetInput) -> &UiState {
        match input {
            BouquetInput::Start => self.start(),
            BouquetInput::GroupAdded => {
                self.add_group();
            }
            BouquetInput::GroupRemoved { group_id } => self.remove_group(group_id),
            BouquetInput::QuantityChanged { group_id, raw } => {
                self.change_quantity(group_id, &raw);
            }
            BouquetInput::AttributeChanged {
                group_id,
                attribute,
            } => self.change_attribute(group_id, attribute),
            BouquetInput::WrappingChanged { wrapping } => self.set_wrapping(wrapping),
            BouquetInput::DescriptionChanged { description } => self.set_description(description),
            BouquetInput::ProceedToSummary => {
                self.proceed();
            }
            BouquetInput::ReturnToStart => self.return_to_start(),
        }
        &self.ui
    }

    /// Enters the selector, creating the first group if there is none yet.
    pub fn start(&mut self) {
        self.show_page(Page::Selector);
        if self.store.is_empty() {
            self.create_group();
        }
    }

    /// Adds a group unless the bouquet is already full.
    pub fn add_group(&mut self) -> Option<GroupId> {
        if !self.ui.add_button.enabled {
            warn!(total = self.ui.total, "add ignored, bouquet is full");
            return None;
        }
        Some(self.create_group())
    }

    pub fn remove_group(&mut self, group_id: GroupId) {
        if self.store.remove(group_id) {
            info!(%group_id, "group removed");
            self.emit(BouquetSignal::GroupDeleted { group_id });
        } else {
            self.recovered(Recovery::RemoveUnknownGroup { group_id });
        }
        self.settle_without_edit();
    }

    /// Settles a typed quantity for one group and writes the result back.
    pub fn change_quantity(&mut self, group_id: GroupId, raw: &str) -> Option<Allocation> {
        if !self.store.contains(group_id) {
            debug!(%group_id, "quantity change for unknown group ignored");
            return None;
        }

        let requested = match allocator::parse_quantity(raw) {
            Some(requested) => requested,
            None => {
                self.recovered(Recovery::InvalidNumericInput {
                    group_id,
                    raw: raw.to_string(),
                });
                0
            }
        };
        let allocation = allocator::allocate(self.store.total_excluding(group_id), requested);
        self.store.set_quantity(group_id, allocation.final_value);
        debug!(
            %group_id,
            requested,
            granted = allocation.final_value,
            total = allocation.new_total,
            "quantity settled"
        );
        self.emit(BouquetSignal::QuantitySettled {
            group_id,
            quantity: allocation.final_value,
        });

        if allocation.was_capped {
            self.recovered(Recovery::CapExceeded {
                group_id,
                requested,
                granted: allocation.final_value,
            });
        }
        self.update_ui(projector::project(
            allocation.new_total,
            allocation.was_capped,
        ));
        Some(allocation)
    }

    pub fn change_attribute(&mut self, group_id: GroupId, attribute: GroupAttribute) {
        if !self.store.set_attribute(group_id, attribute) {
            debug!(%group_id, ?attribute, "attribute change for unknown group ignored");
        }
    }

    pub fn set_wrapping(&mut self, wrapping: impl Into<String>) {
        self.wrapping = wrapping.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Builds a fresh summary and moves to the result page. Always allowed.
    pub fn proceed(&mut self) -> BouquetSummary {
        self.settle_without_edit();
        let summary = summary::summarize(self.store.snapshot(), &self.wrapping, &self.description);
        info!(
            total_flowers = summary.total_flowers,
            line_items = summary.line_items.len(),
            "bouquet summarized"
        );
        self.emit(BouquetSignal::SummaryReady(summary.clone()));
        self.show_page(Page::Result);
        summary
    }

    pub fn return_to_start(&mut self) {
        self.show_page(Page::Start);
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn groups(&self) -> &[FlowerGroup] {
        self.store.snapshot()
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn total(&self) -> u32 {
        self.store.total()
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_visible()
    }

    pub fn wrapping(&self) -> &str {
        &self.wrapping
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn create_group(&mut self) -> GroupId {
        let group_id = self.store.add();
        info!(%group_id, "group added");
        self.emit(BouquetSignal::GroupCreated { group_id });
        self.settle_without_edit();
        group_id
    }

    fn settle_without_edit(&mut self) {
        let total = allocator::recompute(self.store.snapshot());
        self.update_ui(projector::project(total, false));
    }

    fn update_ui(&mut self, ui: UiState) {
        self.ui = ui;
        self.emit(BouquetSignal::StateUpdated(self.ui.clone()));
    }

    fn show_page(&mut self, page: Page) {
        if self.page != page {
            debug!(from = ?self.page, to = ?page, "page changed");
            self.page = page;
            self.emit(BouquetSignal::PageChanged { page });
        }
    }

    fn recovered(&mut self, recovery: Recovery) {
        debug!(%recovery, "recovered input");
        let shows_notice = recovery.shows_notice();
        self.emit(BouquetSignal::Recovered(recovery));
        if shows_notice {
            self.notice.trigger();
        }
    }

    fn emit(&self, signal: BouquetSignal) {
        let _ = self.events.send(signal);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
