pub mod appearance_service;
pub mod appearance_service_impl;
pub use appearance_service::{AppearanceError, AppearanceService};
pub use appearance_service_impl::SeaOrmAppearanceService;

pub mod episode_service;
pub mod episode_service_impl;
pub use episode_service::{EpisodeError, EpisodeService};
pub use episode_service_impl::SeaOrmEpisodeService;

pub mod guest_service;
pub mod guest_service_impl;
pub use guest_service::{GuestError, GuestService};
pub use guest_service_impl::SeaOrmGuestService;
