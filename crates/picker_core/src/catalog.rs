use std::collections::BTreeSet;

use crate::{Record, RecordId};

/// Category predicate carried by filter messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => record.category == *category,
        }
    }
}

/// Full record set plus the filtered view over it.
///
/// `filtered` stores ids into `all`, so it is always an in-order subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    all: Vec<Record>,
    filtered: Vec<RecordId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, records: Vec<Record>) {
        self.all = records;
        self.filtered = (0..self.all.len()).map(RecordId).collect();
    }

    pub fn apply_filter(&mut self, predicate: impl Fn(&Record) -> bool) {
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(record))
            .map(|(index, _)| RecordId(index))
            .collect();
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter(|_| true);
    }

    pub fn all(&self) -> &[Record] {
        &self.all
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.all.get(id.0)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Id of the record at `position` in the filtered sequence.
    pub fn filtered_id(&self, position: usize) -> Option<RecordId> {
        self.filtered.get(position).copied()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().filter_map(|id| self.all.get(id.0))
    }

    /// Position in the filtered sequence of the record called `name`.
    pub fn filtered_position(&self, name: &str) -> Option<usize> {
        self.filtered
            .iter()
            .position(|id| self.all.get(id.0).is_some_and(|r| r.name == name))
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.all
            .iter()
            .map(|record| record.category.as_str())
            .filter(|category| !category.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }
}
