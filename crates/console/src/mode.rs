/// How a console instance is mounted. Chosen once at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MountMode {
    /// Owns the listener, the top-level router and the whole URL space.
    #[default]
    SelfHosted,
    /// Nested inside a host router that supplies the base path and identity.
    HostEmbedded,
}

impl MountMode {
    pub fn from_standalone_flag(standalone: bool) -> Self {
        if standalone {
            MountMode::SelfHosted
        } else {
            MountMode::HostEmbedded
        }
    }

    /// Whether this instance owns global navigation (listener, root fallback, health).
    pub fn owns_navigation(&self) -> bool {
        matches!(self, MountMode::SelfHosted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MountMode::SelfHosted => "standalone",
            MountMode::HostEmbedded => "embedded",
        }
    }
}

impl core::fmt::Display for MountMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
