//! Session identity
//!
//! The identity provider is an external collaborator; the application only
//! consumes a display name and email, read-only. In demo mode the profile is
//! fixed.

use serde::{Deserialize, Serialize};

/// The current user's display profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// A logged-in session
#[derive(Debug, Clone)]
pub struct Session {
    profile: UserProfile,
}

impl Session {
    /// Create a session for the given profile
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    /// The demo session everyone logs into
    pub fn demo() -> Self {
        Self::new(UserProfile {
            name: "Demo User".to_string(),
            email: "demo@billify.app".to_string(),
        })
    }

    /// The current user's profile
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_session() {
        let session = Session::demo();
        assert_eq!(session.profile().name, "Demo User");
        assert_eq!(session.profile().email, "demo@billify.app");
    }
}
