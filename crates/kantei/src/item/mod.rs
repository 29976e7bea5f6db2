//! Tracked item records and the attribute updates applied to them.

mod attributes;
mod record;

pub use attributes::AttributeUpdate;
pub use record::{Backfill, Confirmation, ConfirmationSource, ItemId, ItemRecord};
