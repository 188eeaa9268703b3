pub mod adapter;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod rules;
pub mod verdict;

pub use form::FormCoordinator;

pub mod prelude {
    pub use crate::adapter::{FormAdapter, GroupId, GroupState, MemoryForm};
    pub use crate::catalog::MessageCatalog;
    pub use crate::config::FormOptions;
    pub use crate::error::FormError;
    pub use crate::field::{FieldDescriptor, FieldKind, FieldValue};
    pub use crate::form::FormCoordinator;
    pub use crate::rules::{CrossFieldLookup, RuleContext, RuleSpec, ValidatorRegistry};
    pub use crate::verdict::{FieldError, ValidationResult, Verdict};
}
