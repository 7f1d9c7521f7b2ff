//! Matchup listing page: derives the matchup key from the route, fetches the
//! candidate builds once and narrows them down by style and free text.

pub mod card;
pub mod filter;
pub mod matchup;
pub mod page;
pub mod query;

pub use card::BuildCard;
pub use filter::BuildFilter;
pub use matchup::derive_match_up;
pub use page::{ListingPage, RouteParams};
pub use query::{BuildQuery, FetchRequest, FetchStatus};
