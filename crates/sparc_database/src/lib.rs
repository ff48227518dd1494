//! SQLite persistence for S.P.A.R.C.
//!
//! Diesel schema, row models and [`SqliteStore`], which implements every
//! store trait from `sparc_interface`. Migrations are embedded and applied
//! when the store is opened.
//!
//! # Example
//!
//! ```no_run
//! use sparc_database::SqliteStore;
//! use sparc_interface::CampaignStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("campaign_craft.db", 4)?;
//! for campaign in store.list_campaigns().await? {
//!     println!("{}: {}", campaign.id, campaign.name);
//! }
//! # Ok(())
//! # }
//! ```

mod connection;
mod models;
mod store;

pub mod schema;

pub use connection::{MIGRATIONS, SqlitePool, establish_pool};
pub use models::{
    CampaignRow, ContentChangeset, ContentRow, MetricRow, NewCampaignRow, NewContentRow,
    NewMetricRow, NewPersonaRow, NewScheduleRow, PersonaColumns, PersonaRow, ScheduleRow,
};
pub use store::SqliteStore;
