//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod users;
pub use users::{use_users, use_users_page, Users};

pub mod views;

pub const DX_COMPONENTS_CSS: Asset = asset!("/assets/dx-components-theme.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
