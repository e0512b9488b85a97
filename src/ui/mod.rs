//! User interface components.
//!
//! [`AccountSelect`] and its collaborators are reusable; `home` and `docs` are
//! the pages of the bundled app.

pub mod account_select; // Account dropdown
pub mod docs;           // Implementors page (public for routing)
pub mod dropdown;       // Generic option list
pub mod home;           // Landing page (public for routing)
pub mod identity_icon;  // Address glyphs

pub use account_select::AccountSelect;
pub use dropdown::{Dropdown, DropdownOption, SelectEvent};
pub use identity_icon::IdentityIcon;
