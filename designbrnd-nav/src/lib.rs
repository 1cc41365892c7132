//! Navigation and project selection state for the designbrnd sidebar.
//!
//! The crate is UI-agnostic. A host toolkit renders [`SidebarState`]
//! snapshots and forwards user intents to a [`SidebarController`]:
//! - the [`NavigationCatalog`] is built once and shared through `Arc`;
//! - [`resolve`] maps the current route to at most one active item;
//! - [`ProjectContext`] holds the current project;
//! - the controller talks to the page router through the [`Router`] trait.
//!
//! # Quick Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use designbrnd_nav::{
//!     ClickTarget, MemoryRouter, NavigationCatalog, ProjectContext,
//!     SidebarController,
//! };
//!
//! let catalog = Arc::new(NavigationCatalog::standard().unwrap());
//! let mut sidebar = SidebarController::new(
//!     catalog,
//!     MemoryRouter::new("/"),
//!     ProjectContext::default(),
//! );
//! assert!(sidebar.state().is_active("design-os"));
//!
//! sidebar.dispatch(ClickTarget::Item {
//!     item_id: String::from("kanban-board"),
//! });
//! assert!(sidebar.state().is_active("kanban-board"));
//! ```

mod catalog;
mod controller;
mod errors;
mod icon;
mod observer;
mod project;
mod resolver;
mod router;

pub use catalog::{
    NavigationCatalog, NavigationItem, NavigationSection, SETTINGS_ROUTE,
    SYSTEM_SECTION_ID,
};
pub use controller::{
    ClickTarget, Dispatch, HeaderControl, ProjectControl, RowControl,
    SidebarController, SidebarState,
};
pub use errors::{ConfigError, InvalidProjectError};
pub use icon::{IconId, IconResolver};
pub use observer::{Listener, Observers, SubscriptionId};
pub use project::{Project, ProjectChange, ProjectContext};
pub use resolver::{ActiveItem, resolve};
pub use router::{MemoryRouter, RouteChange, Router};
