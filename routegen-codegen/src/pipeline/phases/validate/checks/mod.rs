//! Built-in checks.

mod element_kind;
mod empty_path;
mod identifier;

pub use element_kind::ElementKindCheck;
pub use empty_path::EmptyPathCheck;
pub use identifier::IdentifierCheck;
