pub mod prelude;

pub mod appearances;
pub mod episodes;
pub mod guests;
