//! Navigation targets shared by the flows and the router.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// A client-side view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Chat,
    Profile,
}

impl Route {
    /// Router path for the view.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Chat => "/chat",
            Self::Profile => "/profile",
        }
    }

    /// Whether the view requires a session token.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Chat | Self::Profile)
    }
}
