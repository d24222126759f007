//! Templates and the view models they render.

use minijinja::{Environment, Value, context, default_auto_escape_callback};
use serde::Serialize;
use useradmin_console::pages::roles::MatrixRow;
use useradmin_console::pages::{Capability, FilterOption, RolesView, UserDetail};
use useradmin_console::route::encode_segment;
use useradmin_console::{Mount, NavItem, Route, Shell};
use useradmin_core::{ActivityItem, Role, User};

/// minijinja environment with the console templates compiled in.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }

    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(template_name)?.render(ctx)
    }

    /// Render a page template with the shared layout variables merged in.
    pub fn render_page(
        &self,
        template_name: &str,
        layout: &LayoutView,
        page: Value,
    ) -> Result<String, minijinja::Error> {
        self.render(template_name, context! { layout => layout, ..page })
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::new()
    }
}

fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template = match name {
        "layout.html" => Some(include_str!("../../templates/layout.html")),
        "list.html" => Some(include_str!("../../templates/list.html")),
        "detail.html" => Some(include_str!("../../templates/detail.html")),
        "detail_not_found.html" => Some(include_str!("../../templates/detail_not_found.html")),
        "create.html" => Some(include_str!("../../templates/create.html")),
        "roles.html" => Some(include_str!("../../templates/roles.html")),
        "host.html" => Some(include_str!("../../templates/host.html")),
        _ => None,
    };

    Ok(template.map(str::to_string))
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LayoutView {
    pub title: String,
    pub nav: Vec<NavItem>,
    pub base_path: String,
    pub mode: &'static str,
    pub current_user: Option<CurrentUserView>,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserView {
    pub name: String,
    pub email: String,
    pub initials: String,
}

impl LayoutView {
    pub fn new(mount: &Mount, current_path: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            nav: mount.shell().nav_items(current_path),
            base_path: mount.context().base_path().to_string(),
            mode: mount.mode().as_str(),
            current_user: mount.context().current_user().map(|user| CurrentUserView {
                name: user.name.clone(),
                email: user.email.clone(),
                initials: user.initials(),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub role: &'static str,
    pub role_label: &'static str,
    pub role_badge: &'static str,
    pub role_glyph: &'static str,
    pub status: &'static str,
    pub status_badge: &'static str,
    pub active: bool,
    pub last_login_date: String,
    pub last_login_time: String,
    pub last_login: String,
    pub joined: String,
    pub detail_href: String,
    pub toggle_href: String,
}

impl UserRow {
    pub fn new(user: &User, shell: &Shell) -> Self {
        let detail_href = shell.href(&Route::Detail(Some(user.id.clone())));
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            initials: user.initials(),
            avatar: user.avatar.clone(),
            role: user.role.as_str(),
            role_label: user.role.label(),
            role_badge: user.role.badge_class(),
            role_glyph: user.role.glyph(),
            status: user.status.as_str(),
            status_badge: user.status.badge_class(),
            active: user.is_active(),
            last_login_date: user.last_login.format("%Y-%m-%d").to_string(),
            last_login_time: user.last_login.format("%H:%M").to_string(),
            last_login: user.last_login.format("%Y-%m-%d %H:%M UTC").to_string(),
            joined: user.created_at.format("%Y-%m-%d").to_string(),
            toggle_href: format!("{}/{}/toggle", shell.list_href(), encode_segment(&user.id)),
            detail_href,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterButton {
    pub value: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub selected: bool,
}

impl FilterButton {
    pub fn from_options(options: Vec<FilterOption>, selected: &str) -> Vec<Self> {
        options
            .into_iter()
            .map(|option| FilterButton {
                selected: option.value == selected,
                value: option.value,
                label: option.label,
                count: option.count,
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityRow {
    pub icon: String,
    pub description: String,
    pub timestamp: String,
}

impl From<&ActivityItem> for ActivityRow {
    fn from(item: &ActivityItem) -> Self {
        Self {
            icon: item.icon.clone(),
            description: item.description.clone(),
            timestamp: item.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DetailPageView {
    pub user: UserRow,
    pub activity: Vec<ActivityRow>,
    pub role: Option<RoleSummary>,
    pub capabilities: Vec<Capability>,
}

impl DetailPageView {
    pub fn new(detail: &UserDetail, shell: &Shell) -> Self {
        Self {
            user: UserRow::new(&detail.user, shell),
            activity: detail.activity.iter().map(ActivityRow::from).collect(),
            role: detail.role.as_ref().map(|role| RoleSummary {
                name: role.name.clone(),
                description: role.description.clone(),
            }),
            capabilities: detail.capabilities.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleCard {
    pub name: String,
    pub description: String,
    pub glyph: &'static str,
    pub user_count: u32,
    pub permission_count: usize,
}

impl From<&Role> for RoleCard {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            glyph: role.glyph(),
            user_count: role.user_count,
            permission_count: role.permissions.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RolesPageView {
    pub cards: Vec<RoleCard>,
    pub role_names: Vec<String>,
    pub rows: Vec<MatrixRow>,
    pub stats: useradmin_console::pages::RoleStats,
}

impl From<&RolesView> for RolesPageView {
    fn from(view: &RolesView) -> Self {
        Self {
            cards: view.roles.iter().map(RoleCard::from).collect(),
            role_names: view.roles.iter().map(|r| r.name.clone()).collect(),
            rows: view.matrix.rows(),
            stats: view.stats,
        }
    }
}
