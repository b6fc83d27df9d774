//! Tab-separated road listings.
//!
//! A listing starts with a query line naming the start and end endpoints,
//! followed by one road per line:
//!
//! ```text
//! A	C
//! A	B	10	1
//! B	C	10	2
//! A	C	25	3
//! ```

mod errors;
mod listing;

pub use errors::TsvProviderError;
pub use listing::RoadListing;
