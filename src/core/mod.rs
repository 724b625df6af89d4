//! Core module containing the envelope, error, query and transform types

pub mod envelope;
pub mod error;
pub mod query;
pub mod time;
pub mod transform;
pub mod validation;

pub use envelope::{Collection, Item, PageMeta, Paginated};
pub use error::{ApiError, ApiResult, ErrorResponse, FieldValidationError};
pub use query::{ListParams, ShowParams};
pub use transform::{IncludeSet, Transformer};
pub use validation::Ruleset;
