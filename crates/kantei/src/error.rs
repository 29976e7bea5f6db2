//! Error types for the Kantei library.

use thiserror::Error;

use crate::catalog::Category;
use crate::item::ItemId;

/// Main error type for Kantei operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KanteiError {
    /// A live record already uses this display label.
    #[error("Label '{0}' is already used by another item")]
    DuplicateLabel(String),

    /// Display labels must contain something other than whitespace.
    #[error("Item label must not be empty")]
    EmptyLabel,

    /// No live record has this id.
    #[error("No item with id {0}")]
    UnknownItem(ItemId),

    /// No live record has this label.
    #[error("No item labelled '{0}'")]
    UnknownLabel(String),

    /// The entered price matches no catalog entry under any price rule.
    #[error("Price {price} matches no {category} in the catalog")]
    NoPriceMatch { category: Category, price: u32 },

    /// The attribute does not belong to the item's category, or leaves no
    /// catalog entry standing.
    #[error("Attribute {attribute} cannot be applied to {category} '{label}'")]
    AttributeMismatch {
        label: String,
        category: Category,
        attribute: String,
    },

    /// Manual confirmation collides with another record's identity.
    #[error("'{name}' is already identified as item '{holder}'")]
    NameAlreadyTaken { name: String, holder: String },

    /// The name is not a base name of the item's category.
    #[error("'{name}' is not a known {category}")]
    UnknownName { category: Category, name: String },

    /// The name is not among the item's remaining candidates.
    #[error("'{name}' is not a candidate for item '{label}'")]
    IdentityMismatch { label: String, name: String },

    /// The record is already identified as something else.
    #[error("Item '{label}' is already identified as '{name}'")]
    AlreadyConfirmed { label: String, name: String },

    /// The update contradicts what is already known about the record.
    #[error("Update conflicts with the identification of item '{label}': {reason}")]
    ConflictsWithIdentification { label: String, reason: String },

    /// The entered attributes only fit identities other records hold.
    #[error("No free identity is left for item '{label}'")]
    NoFreeIdentity { label: String },

    /// Two records were deduced to the same identity in one pass. This is a
    /// logic error, never resolved silently.
    #[error("Contradiction: {0}")]
    Contradiction(String),

    /// The fixed-point loop exceeded its pass bound.
    #[error("Inference did not stabilise within {passes} passes")]
    NonTermination { passes: usize },

    /// The catalog's buy/sell pairs are not one-to-one.
    #[error("Catalog conflict: {0}")]
    CatalogConflict(String),
}

impl KanteiError {
    /// Whether the error stems from user input and can be recovered by
    /// re-prompting, as opposed to an internal logic failure.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            KanteiError::Contradiction(_)
                | KanteiError::NonTermination { .. }
                | KanteiError::CatalogConflict(_)
        )
    }
}

/// Result type alias for Kantei operations.
pub type Result<T> = std::result::Result<T, KanteiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_classification() {
        assert!(KanteiError::DuplicateLabel("A".into()).is_user_facing());
        assert!(
            KanteiError::NoPriceMatch {
                category: Category::Grass,
                price: 61
            }
            .is_user_facing()
        );
        assert!(
            KanteiError::NoFreeIdentity {
                label: "G".into()
            }
            .is_user_facing()
        );
        assert!(!KanteiError::Contradiction("x".into()).is_user_facing());
        assert!(!KanteiError::NonTermination { passes: 3 }.is_user_facing());
    }

    #[test]
    fn test_error_messages() {
        let err = KanteiError::NoPriceMatch {
            category: Category::Grass,
            price: 61,
        };
        assert_eq!(err.to_string(), "Price 61 matches no 草 in the catalog");

        let err = KanteiError::NameAlreadyTaken {
            name: "識別の巻物".into(),
            holder: "A".into(),
        };
        assert!(err.to_string().contains("識別の巻物"));

        let err = KanteiError::NoFreeIdentity { label: "G".into() };
        assert_eq!(err.to_string(), "No free identity is left for item 'G'");
    }
}
