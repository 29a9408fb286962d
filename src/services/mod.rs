pub mod matching_service;
pub mod normalizer;
pub mod page_loader;
pub mod payload_extractor;
pub mod unmatched_writer;

pub use matching_service::{CommuneIndex, IdentityMatch, MatchSource};
pub use page_loader::load_payload;
pub use unmatched_writer::UnmatchedWriter;
