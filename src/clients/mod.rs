pub mod page_client;
pub mod site_urls;

pub use page_client::{PageClient, PageSource};
pub use site_urls::SiteUrls;
