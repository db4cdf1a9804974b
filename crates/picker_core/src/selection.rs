use crate::Record;

pub const MAX_SELECTION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("You can only select up to {max} restaurants.")]
    CapacityExceeded { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("Please select at least one restaurant.")]
    Empty,
}

/// Ordered, name-unique, capacity-bounded set of chosen records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Record>,
    capacity: usize,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::with_capacity(MAX_SELECTION)
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Duplicates are checked before capacity, so re-adding a present record
    /// to a full set is not an error.
    pub fn add(&mut self, record: Record) -> Result<AddOutcome, SelectionError> {
        if self.contains(&record.name) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.is_full() {
            return Err(SelectionError::CapacityExceeded { max: self.capacity });
        }
        self.items.push(record);
        Ok(AddOutcome::Added)
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let index = self.items.iter().position(|r| r.name == name)?;
        Some(self.items.remove(index))
    }

    /// Empties the set, returning the removed records in order.
    pub fn clear(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.items)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[Record] {
        &self.items
    }

    /// Names joined by `", "`, or an error when nothing is selected.
    pub fn confirm(&self) -> Result<String, ConfirmError> {
        if self.items.is_empty() {
            return Err(ConfirmError::Empty);
        }
        Ok(self
            .items
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", "))
    }
}
