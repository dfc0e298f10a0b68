pub use super::appearances::Entity as Appearances;
pub use super::episodes::Entity as Episodes;
pub use super::guests::Entity as Guests;
