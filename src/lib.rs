pub use calendar::{group_by_day, DateKey, DayCell, CELL_PREVIEW_LIMIT};
pub use client::ScheduleClient;
pub use error::{Result, ScheduleError};
pub use facets::{display_label, facet_index, group_label};
pub use filter::{matches_for_day, FilterState};
pub use model::{Game, MatchRecord, MatchStatus};
pub use pandascore::ApiBase;
pub use schedule::{merge, RefreshCycle, Session, Snapshot};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

pub mod calendar;
pub mod client;
pub mod error;
pub mod facets;
pub mod filter;
pub mod model;
pub(crate) mod pandascore;
pub mod schedule;
pub mod store;
pub mod translate;
