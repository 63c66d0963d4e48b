/// Detection domain - parsed lookup results
///
/// Pure data reshaping: normalizes the provider's nested JSON
/// (domain -> paths -> technologies) into indexed, queryable structures.
pub mod domain_info;
pub mod technology;
pub mod timestamp;
pub mod url_technologies;

pub use domain_info::{DomainInfo, UrlKey};
pub use technology::{Technology, TechnologyEntry};
pub use timestamp::{parse_calendar_date, parse_epoch_millis};
pub use url_technologies::UrlTechnologies;
