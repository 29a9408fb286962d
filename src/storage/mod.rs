pub mod price_lookup;
pub mod sqlite_writer;

pub use price_lookup::{CommunePrices, PriceLookup, RunMeta};
pub use sqlite_writer::{SqliteWriter, WriteSummary};
