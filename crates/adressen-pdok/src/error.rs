use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdokError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by PDOK (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("normalization error for document {document}: {reason}")]
    Normalization { document: String, reason: String },

    #[error("pagination limit reached for query {query}: exceeded {max_pages} pages")]
    PaginationLimit { query: String, max_pages: u64 },

    #[error("invalid PDOK endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("no address found for {postcode} {house_number}")]
    AddressNotFound {
        postcode: String,
        house_number: String,
    },

    #[error("invalid coordinates received from PDOK for {display_name}")]
    InvalidCoordinates { display_name: String },

    #[error("coordinates ({lat}, {lng}) do not appear to lie in the Netherlands")]
    OutsideNetherlands { lat: f64, lng: f64 },
}
