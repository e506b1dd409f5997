//! # Role Navigation Model
//!
//! One declarative mapping from a user role to the routes it may render,
//! its default landing path, and its shell menu entries.
//!
//! ## Why One Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │             Role → Route Table (single source of truth)             │
//! │                                                                     │
//! │                     ┌─────────────────┐                             │
//! │                     │   RouteTable    │                             │
//! │                     │  per role, with │                             │
//! │                     │  nav labels and │                             │
//! │                     │  default path   │                             │
//! │                     └───┬─────────┬───┘                             │
//! │                         │         │                                 │
//! │          consulted by   │         │   consulted by                  │
//! │                         ▼         ▼                                 │
//! │               ┌──────────────┐  ┌──────────────┐                    │
//! │               │  RouteGuard  │  │  Shell menu  │                    │
//! │               │ (what may be │  │ (what links  │                    │
//! │               │   rendered)  │  │  are shown)  │                    │
//! │               └──────────────┘  └──────────────┘                    │
//! │                                                                     │
//! │  "What is shown" and "what is allowed" can never drift apart.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Role Coverage
//! - `cashier`: sales screens only, lands on the sales list
//! - `stock_manager`: product/stock/settings screens, lands on products
//! - `admin`: every route including user management, lands on dashboard
//! - any other/unspecified role: full set WITHOUT user management
//!
//! Tables are static configuration; nothing mutates them at runtime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Role
// =============================================================================

/// A user's role as reported by the backend session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Cashier,
    StockManager,
    /// Any role string this client does not recognize, or none at all.
    /// Treated as the full-access table minus user management.
    Unspecified,
}

impl Role {
    /// Parses a raw role string; unknown values map to [`Role::Unspecified`].
    pub fn parse(raw: &str) -> Role {
        match raw {
            "admin" => Role::Admin,
            "cashier" => Role::Cashier,
            "stock_manager" => Role::StockManager,
            _ => Role::Unspecified,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Unspecified
    }
}

// =============================================================================
// Pages
// =============================================================================

/// Identity of a renderable page. The shell maps these to actual views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    ProductList,
    ProductNew,
    ProductEdit,
    SaleList,
    SaleNew,
    SaleDetail,
    Stock,
    Users,
    Reports,
    Settings,
}

// =============================================================================
// Route Table
// =============================================================================

/// One route pattern a role may render.
///
/// `nav_label` is `Some` for routes that appear as shell menu entries;
/// detail/edit routes are reachable but not listed.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    /// Path pattern; `:x` segments match any single non-empty segment.
    pub pattern: &'static str,
    /// Page rendered when the pattern matches.
    pub page: Page,
    /// Menu label, for routes shown in the shell navigation.
    pub nav_label: Option<&'static str>,
}

/// A shell menu entry derived from the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// The ordered route set for one role, plus its default landing path.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    pub entries: &'static [RouteEntry],
    pub default_path: &'static str,
}

const fn entry(pattern: &'static str, page: Page, nav_label: Option<&'static str>) -> RouteEntry {
    RouteEntry {
        pattern,
        page,
        nav_label,
    }
}

/// Cashier: sales screens only.
static CASHIER_TABLE: RouteTable = RouteTable {
    entries: &[
        entry("/sales", Page::SaleList, Some("Sales")),
        entry("/sales/new", Page::SaleNew, None),
        entry("/sales/:id", Page::SaleDetail, None),
    ],
    default_path: "/sales",
};

/// Stock manager: product, stock and settings screens.
static STOCK_MANAGER_TABLE: RouteTable = RouteTable {
    entries: &[
        entry("/products", Page::ProductList, Some("Products")),
        entry("/products/new", Page::ProductNew, None),
        entry("/products/:id/edit", Page::ProductEdit, None),
        entry("/stock", Page::Stock, Some("Stock")),
        entry("/settings", Page::Settings, Some("Settings")),
    ],
    default_path: "/products",
};

/// Admin: everything, including user management.
static ADMIN_TABLE: RouteTable = RouteTable {
    entries: &[
        entry("/", Page::Dashboard, Some("Dashboard")),
        entry("/products", Page::ProductList, Some("Products")),
        entry("/products/new", Page::ProductNew, None),
        entry("/products/:id/edit", Page::ProductEdit, None),
        entry("/sales", Page::SaleList, Some("Sales")),
        entry("/sales/new", Page::SaleNew, None),
        entry("/sales/:id", Page::SaleDetail, None),
        entry("/stock", Page::Stock, Some("Stock")),
        entry("/users", Page::Users, Some("Users")),
        entry("/reports", Page::Reports, Some("Reports")),
        entry("/settings", Page::Settings, Some("Settings")),
    ],
    default_path: "/",
};

/// Unrecognized roles: the full set minus user management.
static UNSPECIFIED_TABLE: RouteTable = RouteTable {
    entries: &[
        entry("/", Page::Dashboard, Some("Dashboard")),
        entry("/products", Page::ProductList, Some("Products")),
        entry("/products/new", Page::ProductNew, None),
        entry("/products/:id/edit", Page::ProductEdit, None),
        entry("/sales", Page::SaleList, Some("Sales")),
        entry("/sales/new", Page::SaleNew, None),
        entry("/sales/:id", Page::SaleDetail, None),
        entry("/stock", Page::Stock, Some("Stock")),
        entry("/reports", Page::Reports, Some("Reports")),
        entry("/settings", Page::Settings, Some("Settings")),
    ],
    default_path: "/",
};

impl RouteTable {
    /// The static route table for a role.
    pub fn for_role(role: Role) -> &'static RouteTable {
        match role {
            Role::Admin => &ADMIN_TABLE,
            Role::Cashier => &CASHIER_TABLE,
            Role::StockManager => &STOCK_MANAGER_TABLE,
            Role::Unspecified => &UNSPECIFIED_TABLE,
        }
    }

    /// Resolves a request path against this table. First match wins, so
    /// literal entries (`/sales/new`) must precede parameterized ones
    /// (`/sales/:id`) in the table.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        self.entries
            .iter()
            .find(|e| pattern_matches(e.pattern, path))
            .map(|e| e.page)
    }

    /// Whether a path is allowed for this table at all.
    pub fn allows(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// Ordered shell menu entries for this table.
    pub fn navigation(&self) -> Vec<NavItem> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.nav_label.map(|label| NavItem {
                    label,
                    path: e.pattern,
                })
            })
            .collect()
    }
}

/// Segment-wise pattern match: equal segment counts, `:x` segments match
/// any non-empty segment, others match literally. Trailing slashes on the
/// request path are ignored.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    continue; // parameter segment, any value matches
                }
                if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("cashier"), Role::Cashier);
        assert_eq!(Role::parse("stock_manager"), Role::StockManager);
        assert_eq!(Role::parse("auditor"), Role::Unspecified);
        assert_eq!(Role::parse(""), Role::Unspecified);
    }

    #[test]
    fn test_pattern_matching() {
        assert!(pattern_matches("/", "/"));
        assert!(pattern_matches("/sales", "/sales"));
        assert!(pattern_matches("/sales", "/sales/"));
        assert!(pattern_matches("/sales/:id", "/sales/65a1f0"));
        assert!(pattern_matches("/products/:id/edit", "/products/42/edit"));

        assert!(!pattern_matches("/sales", "/products"));
        assert!(!pattern_matches("/sales/:id", "/sales"));
        assert!(!pattern_matches("/sales/:id", "/sales/65a1f0/x"));
        assert!(!pattern_matches("/", "/sales"));
    }

    #[test]
    fn test_literal_routes_win_over_parameters() {
        let table = RouteTable::for_role(Role::Cashier);
        assert_eq!(table.resolve("/sales/new"), Some(Page::SaleNew));
        assert_eq!(table.resolve("/sales/65a1f0"), Some(Page::SaleDetail));
    }

    #[test]
    fn test_cashier_table() {
        let table = RouteTable::for_role(Role::Cashier);
        assert_eq!(table.default_path, "/sales");
        assert_eq!(table.resolve("/sales"), Some(Page::SaleList));
        assert!(!table.allows("/products"));
        assert!(!table.allows("/"));
        assert_eq!(
            table.navigation(),
            vec![NavItem {
                label: "Sales",
                path: "/sales",
            }]
        );
    }

    #[test]
    fn test_stock_manager_table() {
        let table = RouteTable::for_role(Role::StockManager);
        assert_eq!(table.default_path, "/products");
        assert_eq!(table.resolve("/stock"), Some(Page::Stock));
        assert_eq!(table.resolve("/products/9/edit"), Some(Page::ProductEdit));
        assert!(!table.allows("/"));
        assert!(!table.allows("/sales"));

        let labels: Vec<&str> = table.navigation().iter().map(|n| n.label).collect();
        assert_eq!(labels, vec!["Products", "Stock", "Settings"]);
    }

    #[test]
    fn test_admin_has_users_route() {
        let table = RouteTable::for_role(Role::Admin);
        assert_eq!(table.default_path, "/");
        assert_eq!(table.resolve("/users"), Some(Page::Users));
        assert_eq!(table.resolve("/"), Some(Page::Dashboard));

        let labels: Vec<&str> = table.navigation().iter().map(|n| n.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Products",
                "Sales",
                "Stock",
                "Users",
                "Reports",
                "Settings",
            ]
        );
    }

    #[test]
    fn test_unspecified_role_excludes_users() {
        let table = RouteTable::for_role(Role::Unspecified);
        assert!(!table.allows("/users"));
        assert_eq!(table.resolve("/"), Some(Page::Dashboard));
        assert!(table.allows("/reports"));

        let labels: Vec<&str> = table.navigation().iter().map(|n| n.label).collect();
        assert!(!labels.contains(&"Users"));
    }
}
