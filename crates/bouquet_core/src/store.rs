use shared::domain::{FlowerGroup, GroupAttribute, GroupId};

/// Ordered flower groups of one bouquet, in creation order.
///
/// The store never enforces the cap; callers settle quantities through the
/// allocator before writing them back.
#[derive(Debug, Default)]
pub struct GroupStore {
    groups: Vec<FlowerGroup>,
    last_id: i64,
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group with default fields and returns its id. Ids are never reused.
    pub fn add(&mut self) -> GroupId {
        self.last_id += 1;
        let id = GroupId(self.last_id);
        self.groups.push(FlowerGroup::new(id));
        id
    }

    /// Returns whether a group was removed; an unknown id is left alone.
    pub fn remove(&mut self, id: GroupId) -> bool {
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        self.groups.len() != before
    }

    pub fn set_quantity(&mut self, id: GroupId, quantity: u32) -> bool {
        match self.get_mut(id) {
            Some(group) => {
                group.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn set_attribute(&mut self, id: GroupId, attribute: GroupAttribute) -> bool {
        match self.get_mut(id) {
            Some(group) => {
                group.apply(attribute);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: GroupId) -> Option<&FlowerGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    fn get_mut(&mut self, id: GroupId) -> Option<&mut FlowerGroup> {
        self.groups.iter_mut().find(|group| group.id == id)
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.get(id).is_some()
    }

    pub fn total(&self) -> u32 {
        self.groups
            .iter()
            .map(|group| group.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Sum of every quantity except the one stored for `id`.
    pub fn total_excluding(&self, id: GroupId) -> u32 {
        self.groups
            .iter()
            .filter(|group| group.id != id)
            .map(|group| group.quantity)
            .fold(0, u32::saturating_add)
    }

    pub fn snapshot(&self) -> &[FlowerGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
