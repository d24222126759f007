//! Host embedding boundary.

use std::sync::{Arc, Mutex, PoisonError};

use useradmin_core::{ConsoleError, ConsoleResult, User};
use useradmin_infra::UserRepository;

use crate::context::AppContext;
use crate::mode::MountMode;
use crate::pages::list::ListPage;
use crate::shell::Shell;

/// What a host hands to an embedded console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostProps {
    /// Prefix the host mounted the console under. Defaults to empty.
    pub base_path: Option<String>,
    /// The host's signed-in user.
    pub current_user: Option<User>,
}

impl HostProps {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: Some(base_path.into()),
            current_user: None,
        }
    }

    pub fn with_current_user(mut self, user: User) -> Self {
        self.current_user = Some(user);
        self
    }
}

/// One mounted console instance.
///
/// Owns the shared context, the routing shell, the repository handle and the
/// list page's local state (status toggles survive between requests but never
/// reach the repository).
pub struct Mount {
    mode: MountMode,
    context: Arc<AppContext>,
    shell: Shell,
    repository: Arc<dyn UserRepository>,
    list: Mutex<ListPage>,
}

impl Mount {
    /// Mount a console.
    ///
    /// A self-hosted console has no host: its base path is empty and any
    /// `host` props are ignored. An embedded console without host props is a
    /// wiring defect and fails with [`ConsoleError::ContextUnavailable`].
    pub fn new(
        mode: MountMode,
        host: Option<HostProps>,
        repository: Arc<dyn UserRepository>,
    ) -> ConsoleResult<Self> {
        let context = match (mode, host) {
            (MountMode::SelfHosted, None) => AppContext::standalone(),
            (MountMode::SelfHosted, Some(_)) => {
                tracing::warn!("host props ignored by a self-hosted console");
                AppContext::standalone()
            }
            (MountMode::HostEmbedded, Some(props)) => {
                AppContext::new(props.base_path.unwrap_or_default(), props.current_user)
            }
            (MountMode::HostEmbedded, None) => {
                tracing::error!("embedded console mounted without host props");
                return Err(ConsoleError::ContextUnavailable);
            }
        };

        Ok(Self::assemble(mode, context, repository))
    }

    pub fn standalone(repository: Arc<dyn UserRepository>) -> Self {
        Self::assemble(MountMode::SelfHosted, AppContext::standalone(), repository)
    }

    fn assemble(mode: MountMode, context: AppContext, repository: Arc<dyn UserRepository>) -> Self {
        let context = Arc::new(context);
        let list = ListPage::load(repository.as_ref());

        tracing::info!(
            mode = %mode,
            base_path = context.base_path(),
            current_user = context.current_user().map(|u| u.id.as_str()),
            "console mounted"
        );

        Self {
            mode,
            shell: Shell::new(mode, context.clone()),
            context,
            repository,
            list: Mutex::new(list),
        }
    }

    pub fn mode(&self) -> MountMode {
        self.mode
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn repository(&self) -> &dyn UserRepository {
        self.repository.as_ref()
    }

    /// Run `f` against the list page's local state.
    pub fn with_list<T>(&self, f: impl FnOnce(&mut ListPage) -> T) -> T {
        // A panic mid-toggle leaves at worst one flipped status; keep serving.
        let mut list = self.list.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut list)
    }
}

impl core::fmt::Debug for Mount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mount")
            .field("mode", &self.mode)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradmin_core::{UserId, UserStatus};
    use useradmin_infra::InMemoryRepository;

    fn repo() -> Arc<dyn UserRepository> {
        Arc::new(InMemoryRepository::seeded())
    }

    #[test]
    fn embedded_without_host_is_context_unavailable() {
        let err = Mount::new(MountMode::HostEmbedded, None, repo()).unwrap_err();
        assert_eq!(err, ConsoleError::ContextUnavailable);
    }

    #[test]
    fn embedded_uses_host_base_path_and_user() {
        let host_user = InMemoryRepository::seeded().users().remove(0);
        let props = HostProps::new("/users").with_current_user(host_user.clone());
        let mount = Mount::new(MountMode::HostEmbedded, Some(props), repo()).unwrap();

        assert_eq!(mount.context().base_path(), "/users");
        assert_eq!(mount.context().current_user(), Some(&host_user));
        assert_eq!(mount.shell().list_href(), "/users/list");
    }

    #[test]
    fn embedded_base_path_defaults_to_empty() {
        let mount = Mount::new(MountMode::HostEmbedded, Some(HostProps::default()), repo()).unwrap();
        assert_eq!(mount.context().base_path(), "");
    }

    #[test]
    fn self_hosted_ignores_host_props() {
        let mount = Mount::new(MountMode::SelfHosted, Some(HostProps::new("/x")), repo()).unwrap();
        assert_eq!(mount.context().base_path(), "");
        assert!(mount.mode().owns_navigation());
    }

    #[test]
    fn standalone_matches_self_hosted_mount() {
        let direct = Mount::standalone(repo());
        let via_new = Mount::new(MountMode::SelfHosted, None, repo()).unwrap();

        assert_eq!(direct.mode(), via_new.mode());
        assert_eq!(direct.context(), via_new.context());
        assert_eq!(direct.shell().list_href(), "/list");
        assert_eq!(
            direct.with_list(|list| list.users().len()),
            via_new.with_list(|list| list.users().len())
        );
    }

    #[test]
    fn list_state_persists_across_calls_but_not_into_repository() {
        let mount = Mount::standalone(repo());
        let id = UserId::new("1");

        mount.with_list(|list| list.toggle_status(&id));
        let status = mount.with_list(|list| list.users()[0].status);
        assert_eq!(status, UserStatus::Inactive);

        assert_eq!(mount.repository().users()[0].status, UserStatus::Active);
    }
}
