//! # Route Guard
//!
//! Decides what to do with an incoming route request: render it, redirect
//! it, or send the user to the login screen.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  route request (session, nav context, path)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  anonymous? ──────────► /login → ShowLogin, else RedirectToLogin    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  entered via shell navigation?                                      │
//! │       │ no (address bar / external link) → back to the login        │
//! │       │    screen; proceeding from there re-enters via the shell    │
//! │       ▼                                                             │
//! │  role allows path? ───► yes → Render(page)                          │
//! │                         no  → Redirect(role default)                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Navigation Intent
//! Entry must come through the application shell: a deep link typed into
//! a fresh tab bounces to the login screen even with a live session, and
//! continuing from there records shell intent. The intent is an explicit
//! [`NavContext`] value owned by the shell and passed into every
//! decision, not an ambient flag the guard reads from shared storage.
//! It is a UX guard, not a security boundary; the backend authorizes
//! every request on its own.

use serde::{Deserialize, Serialize};

use champ_core::routing::{NavItem, Page, Role, RouteTable};

/// Path of the login screen, the only route an anonymous session renders.
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// Session
// =============================================================================

/// The signed-in user as reported by the backend session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

/// Authentication state of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated { user: SessionUser },
}

impl Session {
    /// The role driving route decisions, if signed in.
    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user } => Some(user.role),
        }
    }
}

// =============================================================================
// Navigation Intent
// =============================================================================

/// Tracks whether the current tab has navigated through the shell yet.
///
/// Fresh per tab/window. Once the user navigates via a shell link the
/// intent sticks for the rest of the tab's life; interior routes become
/// directly reachable (back/forward, in-app links).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavContext {
    via_shell: bool,
}

impl NavContext {
    /// A fresh context, as on direct URL entry.
    pub fn new() -> Self {
        NavContext::default()
    }

    /// Records that a shell-initiated navigation happened.
    pub fn mark_shell_navigation(&mut self) {
        self.via_shell = true;
    }

    /// Whether any shell-initiated navigation has happened in this tab.
    pub fn entered_via_shell(&self) -> bool {
        self.via_shell
    }
}

/// Marks shell intent and returns the target path, for shell link
/// handlers: `router.push(navigate(&mut nav, "/sales/new"))`.
pub fn navigate<'a>(nav: &mut NavContext, path: &'a str) -> &'a str {
    nav.mark_shell_navigation();
    path
}

// =============================================================================
// Decisions
// =============================================================================

/// What the shell should do with a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the login screen.
    ShowLogin,
    /// Not signed in; go to the login screen.
    RedirectToLogin,
    /// Render this page.
    Render(Page),
    /// Go to this path instead (role default).
    Redirect(&'static str),
}

/// Evaluates one route request.
pub fn evaluate_route(session: &Session, nav: &NavContext, path: &str) -> RouteDecision {
    let Some(role) = session.role() else {
        return if path == LOGIN_PATH {
            RouteDecision::ShowLogin
        } else {
            RouteDecision::RedirectToLogin
        };
    };

    // Even with a live session, a tab that never navigated through the
    // shell goes back to the login screen; continuing from there is a
    // shell navigation and records the intent.
    if !nav.entered_via_shell() {
        return if path == LOGIN_PATH {
            RouteDecision::ShowLogin
        } else {
            RouteDecision::RedirectToLogin
        };
    }

    let table = RouteTable::for_role(role);
    if path == LOGIN_PATH {
        return RouteDecision::Redirect(table.default_path);
    }

    match table.resolve(path) {
        Some(page) => RouteDecision::Render(page),
        None => RouteDecision::Redirect(table.default_path),
    }
}

/// The shell menu for a role, straight from its route table.
pub fn menu_for(role: Role) -> Vec<NavItem> {
    RouteTable::for_role(role).navigation()
}

// =============================================================================
// Unit Tests
// =============================================================================
