pub mod documents;
pub mod health;
pub mod identifiers;
pub mod taxes;
