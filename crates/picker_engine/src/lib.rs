//! Picker engine: catalog IO and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, FileFetcher, ReqwestFetcher, SourceFetcher};
pub use types::{CatalogSource, EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
