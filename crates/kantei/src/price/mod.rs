//! Price codec and price-variant rules.

mod codec;
mod variant;

pub use codec::PriceCodec;
pub use variant::{BLESSED_MULTIPLIER, CURSED_DENOMINATOR, CURSED_NUMERATOR, PriceVariant};
