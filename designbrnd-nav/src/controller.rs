use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use crate::catalog::{
    NavigationCatalog, NavigationItem, NavigationSection, SETTINGS_ROUTE,
};
use crate::errors::InvalidProjectError;
use crate::observer::{Listener, Observers, SubscriptionId};
use crate::project::{Project, ProjectChange, ProjectContext};
use crate::resolver::{self, ActiveItem};
use crate::router::{RouteChange, Router};

/// Discrete change fed to the controller's update function.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SidebarChange {
    RouteChanged(String),
    ProjectChanged(Project),
}

/// Snapshot of everything the sidebar renders.
///
/// Recomputed on every route or project change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    current_route: String,
    current_project: Project,
    catalog: Arc<NavigationCatalog>,
    active: Option<ActiveItem>,
}

impl SidebarState {
    fn compute(
        current_route: String,
        current_project: Project,
        catalog: Arc<NavigationCatalog>,
    ) -> Self {
        let active = resolver::resolve(&current_route, catalog.sections());
        Self {
            current_route,
            current_project,
            catalog,
            active,
        }
    }

    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    pub fn current_project(&self) -> &Project {
        &self.current_project
    }

    pub fn sections(&self) -> &[NavigationSection] {
        self.catalog.sections()
    }

    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    /// Location of the highlighted entry, if the route has one.
    pub fn active(&self) -> Option<&ActiveItem> {
        self.active.as_ref()
    }

    /// The highlighted entry itself.
    pub fn active_item(&self) -> Option<&NavigationItem> {
        self.active
            .as_ref()
            .and_then(|active| self.catalog.item(&active.item_id))
    }

    pub fn is_active(&self, item_id: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.item_id == item_id)
    }
}

/// Sub-control nested inside a navigation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    /// The close glyph on the active row.
    Dismiss,
}

/// Controls in the sidebar header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    Settings,
    Notifications,
    More,
}

/// Controls on the current-project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectControl {
    Select,
    More,
}

/// What the user clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Item { item_id: String },
    ItemControl { item_id: String, control: RowControl },
    Header(HeaderControl),
    Project(ProjectControl),
}

/// Outcome of a dispatched click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A transition to `route` was requested from the router.
    Navigated { route: String },
    /// A nested control consumed the click.
    Contained,
    /// The target does not exist in the catalog.
    Ignored,
}

/// Translates user intents into router transitions and project switches.
pub struct SidebarController<R: Router> {
    router: R,
    project: ProjectContext,
    catalog: Arc<NavigationCatalog>,
    state: SidebarState,
    route_events: Receiver<String>,
    observers: Observers<SidebarState>,
}

impl<R: Router> SidebarController<R> {
    /// Wire the controller to `router` and start from its current path.
    pub fn new(
        catalog: Arc<NavigationCatalog>,
        mut router: R,
        project: ProjectContext,
    ) -> Self {
        let (sender, route_events) = mpsc::channel();
        router.on_change(Box::new(move |change: &RouteChange| {
            let _ = sender.send(change.current.clone());
        }));

        let state = SidebarState::compute(
            router.current_path().to_string(),
            project.current().clone(),
            Arc::clone(&catalog),
        );

        Self {
            router,
            project,
            catalog,
            state,
            route_events,
            observers: Observers::new(),
        }
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn current_project(&self) -> &Project {
        self.project.current()
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Run `action` against the router, then pick up any route it reported.
    pub fn with_router<T>(&mut self, action: impl FnOnce(&mut R) -> T) -> T {
        let output = action(&mut self.router);
        self.sync_route();
        output
    }

    /// Ask the router to show `route`.
    ///
    /// The current route only changes once the router reports it.
    pub fn navigate_to(&mut self, route: &str) {
        log::debug!("navigate to {route}");
        self.router.transition_to(route);
        self.sync_route();
    }

    pub fn open_settings(&mut self) {
        self.navigate_to(SETTINGS_ROUTE);
    }

    /// Switch the current project.
    ///
    /// On error the previous project stays displayed and the route is left
    /// alone.
    pub fn request_project_switch(
        &mut self,
        project: Project,
    ) -> Result<(), InvalidProjectError> {
        self.project.switch_to(project)?;
        let current = self.project.current().clone();
        self.apply(SidebarChange::ProjectChanged(current));
        Ok(())
    }

    /// Close glyph on the active row. Consumes the click and does nothing
    /// else until the control gets a defined action.
    pub fn dismiss_active_item_control(&mut self, item_id: &str) -> Dispatch {
        log::debug!("dismiss control on '{item_id}' contained");
        Dispatch::Contained
    }

    /// Route a click: nested controls first, the row only when no control
    /// consumed it.
    pub fn dispatch(&mut self, target: ClickTarget) -> Dispatch {
        if let Some(outcome) = self.dispatch_control(&target) {
            return outcome;
        }

        match target {
            ClickTarget::Item { item_id } => self.dispatch_row(&item_id),
            _ => Dispatch::Ignored,
        }
    }

    /// Single update function for route and project changes.
    ///
    /// Routes only arrive from the router channel and projects only after
    /// [`ProjectContext::switch_to`] accepted them.
    fn apply(&mut self, change: SidebarChange) {
        let next = match change {
            SidebarChange::RouteChanged(route) => SidebarState::compute(
                route,
                self.state.current_project.clone(),
                Arc::clone(&self.catalog),
            ),
            SidebarChange::ProjectChanged(project) => SidebarState::compute(
                self.state.current_route.clone(),
                project,
                Arc::clone(&self.catalog),
            ),
        };

        if next != self.state {
            self.state = next;
            self.observers.notify(&self.state);
        }
    }

    /// Apply route changes the router reported since the last sync.
    pub fn sync_route(&mut self) {
        while let Ok(route) = self.route_events.try_recv() {
            self.apply(SidebarChange::RouteChanged(route));
        }
    }

    /// Listen for new snapshots.
    pub fn subscribe(
        &mut self,
        listener: Listener<SidebarState>,
    ) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Listen for project switches only.
    pub fn subscribe_project(
        &mut self,
        listener: Listener<ProjectChange>,
    ) -> SubscriptionId {
        self.project.subscribe(listener)
    }

    fn dispatch_control(&mut self, target: &ClickTarget) -> Option<Dispatch> {
        match target {
            ClickTarget::ItemControl {
                item_id,
                control: RowControl::Dismiss,
            } => Some(self.dismiss_active_item_control(item_id)),
            ClickTarget::Header(HeaderControl::Settings) => {
                self.open_settings();
                Some(Dispatch::Navigated {
                    route: SETTINGS_ROUTE.to_string(),
                })
            },
            ClickTarget::Header(control) => {
                log::debug!("header control {control:?} contained");
                Some(Dispatch::Contained)
            },
            ClickTarget::Project(control) => {
                log::debug!("project control {control:?} contained");
                Some(Dispatch::Contained)
            },
            ClickTarget::Item { .. } => None,
        }
    }

    fn dispatch_row(&mut self, item_id: &str) -> Dispatch {
        let Some(route) = self
            .catalog
            .item(item_id)
            .map(|item| item.route().to_string())
        else {
            log::warn!("click on unknown item '{item_id}' ignored");
            return Dispatch::Ignored;
        };

        self.navigate_to(&route);
        Dispatch::Navigated { route }
    }
}
