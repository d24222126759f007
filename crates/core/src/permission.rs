use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque strings of the form `resource.action`
/// (e.g. "users.create"). Nothing enforces the format; a permission without a
/// dot is treated as a bare resource name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `resource` part of `resource.action`.
    pub fn resource(&self) -> &str {
        self.split().0
    }

    /// The `action` part of `resource.action`, if present.
    pub fn action(&self) -> Option<&str> {
        self.split().1
    }

    /// Human-readable label: `users.create` becomes `Create Users`.
    pub fn label(&self) -> String {
        match self.action() {
            Some(action) => format!("{} {}", capitalize(action), capitalize(self.resource())),
            None => capitalize(self.resource()),
        }
    }

    fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once('.') {
            Some((resource, action)) => (resource, Some(action)),
            None => (&self.0, None),
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
