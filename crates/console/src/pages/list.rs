//! User list: filtering, option counts and the in-memory status toggle.

use serde::{Deserialize, Serialize};
use useradmin_core::{User, UserId, UserRole, UserStatus};
use useradmin_infra::UserRepository;

/// Sentinel that disables a filter dimension.
pub const ALL: &str = "all";

/// Conjunctive filter over the user list.
///
/// `role` and `status` match exactly when set; `None`, an empty string or
/// [`ALL`] disable the dimension. `search` is a case-insensitive substring
/// matched against name or email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "q")]
    pub search: Option<String>,
}

impl UserFilter {
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn matches(&self, user: &User) -> bool {
        dimension_matches(self.role.as_deref(), user.role.as_str())
            && dimension_matches(self.status.as_deref(), user.status.as_str())
            && self.search_matches(user)
    }

    fn search_matches(&self, user: &User) -> bool {
        let needle = match self.search.as_deref() {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return true,
        };
        user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
    }

    /// Selected role value for the UI (`"all"` when unset).
    pub fn role_value(&self) -> &str {
        selected(self.role.as_deref())
    }

    /// Selected status value for the UI (`"all"` when unset).
    pub fn status_value(&self) -> &str {
        selected(self.status.as_deref())
    }

    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    /// No dimension restricts the result.
    pub fn is_unrestricted(&self) -> bool {
        self.role_value() == ALL && self.status_value() == ALL && self.search_text().is_empty()
    }
}

fn dimension_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some("") | Some(ALL) => true,
        Some(value) => value == actual,
    }
}

fn selected(value: Option<&str>) -> &str {
    match value {
        None | Some("") => ALL,
        Some(v) => v,
    }
}

/// Users matching `filter`, in input order.
pub fn list_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    users.iter().filter(|u| filter.matches(u)).cloned().collect()
}

/// A filter button with the number of users it would select on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Local state of the list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    users: Vec<User>,
}

impl ListPage {
    pub fn load(repository: &dyn UserRepository) -> Self {
        Self::from_users(repository.users())
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn list_users(&self, filter: &UserFilter) -> Vec<User> {
        list_users(&self.users, filter)
    }

    /// Flip active/inactive for `user_id`.
    ///
    /// Returns the new status, or `None` (and changes nothing) when the id is
    /// unknown.
    pub fn toggle_status(&mut self, user_id: &UserId) -> Option<UserStatus> {
        let user = self.users.iter_mut().find(|u| &u.id == user_id)?;
        user.status = user.status.toggled();
        Some(user.status)
    }

    pub fn role_options(&self) -> Vec<FilterOption> {
        let mut options = vec![FilterOption {
            value: ALL,
            label: "All Roles",
            count: self.users.len(),
        }];
        options.extend(UserRole::ALL.iter().map(|role| FilterOption {
            value: role.as_str(),
            label: role.label(),
            count: self.users.iter().filter(|u| u.role == *role).count(),
        }));
        options
    }

    pub fn status_options(&self) -> Vec<FilterOption> {
        let mut options = vec![FilterOption {
            value: ALL,
            label: "All Status",
            count: self.users.len(),
        }];
        options.extend(UserStatus::ALL.iter().map(|status| FilterOption {
            value: status.as_str(),
            label: status.label(),
            count: self.users.iter().filter(|u| u.status == *status).count(),
        }));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use useradmin_infra::InMemoryRepository;

    fn seeded() -> ListPage {
        ListPage::load(&InMemoryRepository::seeded())
    }

    fn ids(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn unrestricted_filter_returns_everyone_in_order() {
        let page = seeded();
        let all = page.list_users(&UserFilter::default());
        assert_eq!(ids(&all), ["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(UserFilter::default().role(ALL).status(ALL).is_unrestricted());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_email() {
        let page = seeded();
        assert_eq!(ids(&page.list_users(&UserFilter::default().search("JOHN"))), ["1", "2"]);
        assert_eq!(ids(&page.list_users(&UserFilter::default().search("lee@"))), ["8"]);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let page = seeded();
        let filter = UserFilter::default().role("user").status("inactive");
        assert_eq!(ids(&page.list_users(&filter)), ["8"]);

        let filter = UserFilter::default().role("admin").search("sarah");
        assert!(page.list_users(&filter).is_empty());
    }

    #[test]
    fn unknown_role_value_matches_nobody() {
        let page = seeded();
        assert!(page.list_users(&UserFilter::default().role("superuser")).is_empty());
    }

    #[test]
    fn toggle_twice_restores_status() {
        let mut page = seeded();
        let id = UserId::new("4");
        assert_eq!(page.toggle_status(&id), Some(UserStatus::Active));
        assert_eq!(page.toggle_status(&id), Some(UserStatus::Inactive));
        assert_eq!(page, seeded());
    }

    #[test]
    fn toggle_unknown_id_is_a_silent_no_op() {
        let mut page = seeded();
        assert_eq!(page.toggle_status(&UserId::new("404")), None);
        assert_eq!(page, seeded());
    }

    #[test]
    fn option_counts_follow_local_state() {
        let mut page = seeded();
        let counts = |page: &ListPage| -> Vec<usize> {
            page.status_options().iter().map(|o| o.count).collect()
        };
        assert_eq!(counts(&page), [8, 6, 2]);

        page.toggle_status(&UserId::new("1"));
        assert_eq!(counts(&page), [8, 5, 3]);

        let roles: Vec<_> = page.role_options().iter().map(|o| (o.value, o.count)).collect();
        assert_eq!(roles, [("all", 8), ("admin", 2), ("user", 4), ("viewer", 2)]);
    }

    fn arb_user() -> impl Strategy<Value = User> {
        (
            "[a-z]{1,6}",
            "[A-Za-z ]{0,12}",
            "[a-z.@]{0,12}",
            prop::sample::select(UserRole::ALL.to_vec()),
            prop::sample::select(UserStatus::ALL.to_vec()),
        )
            .prop_map(|(id, name, email, role, status)| {
                let now = Utc::now();
                User {
                    id: UserId::new(id),
                    name,
                    email,
                    role,
                    status,
                    last_login: now,
                    created_at: now,
                    avatar: None,
                }
            })
    }

    fn arb_dimension(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(values).prop_map(str::to_string))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every returned user comes from the input and satisfies
        /// every active predicate; order is preserved.
        #[test]
        fn filtered_users_are_an_ordered_subset_matching_all_predicates(
            users in prop::collection::vec(arb_user(), 0..20),
            role in arb_dimension(&["all", "admin", "user", "viewer"]),
            status in arb_dimension(&["all", "active", "inactive"]),
            search in prop::option::of("[A-Za-z]{0,3}"),
        ) {
            let filter = UserFilter { role: role.clone(), status: status.clone(), search: search.clone() };
            let result = list_users(&users, &filter);

            let mut cursor = users.iter();
            for user in &result {
                prop_assert!(cursor.any(|candidate| candidate == user));

                if let Some(r) = role.as_deref().filter(|r| *r != ALL) {
                    prop_assert_eq!(user.role.as_str(), r);
                }
                if let Some(s) = status.as_deref().filter(|s| *s != ALL) {
                    prop_assert_eq!(user.status.as_str(), s);
                }
                if let Some(text) = search.as_deref() {
                    let text = text.to_lowercase();
                    prop_assert!(
                        user.name.to_lowercase().contains(&text)
                            || user.email.to_lowercase().contains(&text)
                    );
                }
            }

            let expected = users.iter().filter(|u| filter.matches(u)).count();
            prop_assert_eq!(result.len(), expected);
        }
    }
}
