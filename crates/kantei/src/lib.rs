//! Kantei: identification inference for unidentified roguelike items.
//!
//! Items found in a dungeon carry placeholder labels until identified. The
//! shop prices they fetch, plus a few observable traits, narrow down which
//! real item each one can be. Kantei tracks those observations and deduces
//! identities by elimination.
//!
//! # Core Principles
//!
//! - **Catalog-driven**: Every candidate comes from the reference catalog
//! - **Fixed point**: Each change is propagated until nothing more follows
//! - **All or nothing**: A change that leads to a contradiction is rejected
//!
//! # Example
//!
//! ```
//! use kantei::{AttributeUpdate, Category, Tracker};
//!
//! let mut tracker = Tracker::new().unwrap();
//! let a = tracker.create_item(Category::Grass, "A").unwrap();
//! let b = tracker.create_item(Category::Grass, "B").unwrap();
//!
//! tracker.set_attributes(a, AttributeUpdate::new().with_buy_price(80)).unwrap();
//! assert_eq!(tracker.candidates(a).unwrap().len(), 2);
//!
//! // 40 can only be 薬草, which leaves 弟切草 for A.
//! tracker.set_attributes(b, AttributeUpdate::new().with_buy_price(40)).unwrap();
//! assert_eq!(tracker.confirmed(b).unwrap(), Some("薬草"));
//! assert_eq!(tracker.confirmed(a).unwrap(), Some("弟切草"));
//! ```

pub mod catalog;
pub mod error;
pub mod inference;
pub mod item;
pub mod price;

mod tracker;

pub use crate::tracker::{Tracker, TrackerConfig};
pub use catalog::{AnnotatedName, Catalog, CatalogEntry, Category, CategoryAttribute, PotType};
pub use error::{KanteiError, Result};
pub use inference::{Block, IdentityLedger, InferenceConfig, InferenceReport};
pub use item::{AttributeUpdate, Backfill, Confirmation, ConfirmationSource, ItemId, ItemRecord};
pub use price::{PriceCodec, PriceVariant};
