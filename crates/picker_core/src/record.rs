/// Position of a record in the loaded catalog. Stable until the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub usize);

/// One catalog entry. `name` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub name: String,
    pub photo_1: String,
    pub description_short: String,
    pub neighborhood: String,
    pub source1: String,
    pub category: String,
}

impl Record {
    /// Card subtitle: `category | neighborhood | source`.
    pub fn meta_line(&self) -> String {
        format!("{} | {} | {}", self.category, self.neighborhood, self.source1)
    }
}
