pub mod client;
pub mod collect;
pub mod dedup;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod types;

mod rate_limit;

pub use client::PdokClient;
pub use collect::{collect_addresses, CollectionResult, TermOutcome, TermReport};
pub use dedup::dedup_by_display_name;
pub use error::PdokError;
pub use normalize::normalize_document;
pub use pagination::QueryBatch;
pub use query::SearchQuery;
pub use types::{RawDocument, SearchPage};
