//! Route variants for endpoints that differ between backend deployments
//!
//! Some resources are mounted under different paths depending on the backend
//! release. Each variant is selected explicitly through [`RouteConfig`].

use std::fmt;
use std::str::FromStr;

/// Coach endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoachRoutes {
    /// `/api/v1/coach`, search parameters sent as-is
    Singular,
    /// `/api/v1/coaches`, `size`→`pageSize` and `name`→`keyword`
    Plural,
}

impl CoachRoutes {
    pub fn base(self) -> &'static str {
        match self {
            CoachRoutes::Singular => "/api/v1/coach",
            CoachRoutes::Plural => "/api/v1/coaches",
        }
    }
}

/// Action endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRoutes {
    /// `/api/v1/actions`, `size`→`pageSize`, update via `POST /actions/{id}`
    Plural,
    /// `/api/v1/action`, search parameters sent as-is, update via `PUT`
    Singular,
}

impl ActionRoutes {
    pub fn base(self) -> &'static str {
        match self {
            ActionRoutes::Plural => "/api/v1/actions",
            ActionRoutes::Singular => "/api/v1/action",
        }
    }
}

/// Where the current user's profile is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileRoutes {
    /// `PUT /api/v1/user`
    User,
    /// `PUT /api/v1/user/info`
    UserInfo,
}

impl ProfileRoutes {
    pub fn update_path(self) -> &'static str {
        match self {
            ProfileRoutes::User => "/api/v1/user",
            ProfileRoutes::UserInfo => "/api/v1/user/info",
        }
    }
}

/// The route variants of one backend deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    pub coach: CoachRoutes,
    pub action: ActionRoutes,
    pub profile: ProfileRoutes,
}

impl RouteConfig {
    pub fn new(coach: CoachRoutes, action: ActionRoutes, profile: ProfileRoutes) -> Self {
        Self {
            coach,
            action,
            profile,
        }
    }
}

/// Error for an unknown route variant name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} routes '{value}', expected one of: {}", expected.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

macro_rules! route_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }
    };
}

route_names!(CoachRoutes, "coach", { Singular => "singular", Plural => "plural" });
route_names!(ActionRoutes, "action", { Plural => "plural", Singular => "singular" });
route_names!(ProfileRoutes, "profile", { User => "user", UserInfo => "user-info" });
