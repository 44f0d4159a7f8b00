// Where analyses come from: the HTTP backend or the bundled demo payload
pub mod demo_source;
pub mod http_source;
pub mod source;

// Re-export commonly used types
pub use demo_source::DemoSentimentSource;
pub use http_source::HttpSentimentSource;
pub use source::{SentimentSource, decode_response, endpoint_url};
