//! Reusable UI components

pub mod loading;
pub mod sidebar;
pub mod stage_card;
pub mod task_card;
pub mod toast;

pub use loading::{LoadingDots, LoadingSpinner};
pub use sidebar::Sidebar;
pub use stage_card::StageCard;
pub use task_card::TaskCard;
pub use toast::ToastHost;
