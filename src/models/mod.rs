pub mod appearance;
pub mod episode;
pub mod guest;

pub use appearance::{Appearance, AppearanceWithParents, NewAppearance};
pub use episode::{Episode, EpisodeWithAppearances};
pub use guest::{Guest, GuestWithAppearances};
