pub mod client;
pub mod collector;
pub mod error;
pub mod extract;
pub mod ingredient;
pub mod pace;

pub use client::SiteClient;
pub use collector::{CollectOutcome, Collector, StopReason};
pub use error::ScraperError;
pub use extract::{ListingEntry, ListingExtractor};
pub use ingredient::IngredientMatcher;
pub use pace::{FixedDelay, NoDelay, Pacer, Step};
