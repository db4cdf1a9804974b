use crate::{Record, RecordId};

/// Presentation handle for a thumbnail token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThumbnailId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub id: ThumbnailId,
    pub record_id: RecordId,
    pub name: String,
    pub photo: String,
}

/// Maps selected records to their thumbnail handles, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThumbnailBridge {
    thumbnails: Vec<Thumbnail>,
    next_id: u64,
}

impl ThumbnailBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, record_id: RecordId, record: &Record) -> ThumbnailId {
        let id = ThumbnailId(self.next_id);
        self.next_id += 1;
        self.thumbnails.push(Thumbnail {
            id,
            record_id,
            name: record.name.clone(),
            photo: record.photo_1.clone(),
        });
        id
    }

    pub fn destroy(&mut self, name: &str) -> Option<ThumbnailId> {
        let index = self.thumbnails.iter().position(|t| t.name == name)?;
        Some(self.thumbnails.remove(index).id)
    }

    pub fn clear(&mut self) -> Vec<ThumbnailId> {
        self.thumbnails.drain(..).map(|t| t.id).collect()
    }

    pub fn get(&self, id: ThumbnailId) -> Option<&Thumbnail> {
        self.thumbnails.iter().find(|t| t.id == id)
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }
}
