//! Auth collaborator boundary.

use crate::{AuthError, User};
use async_trait::async_trait;

/// Snapshot of the auth session, delivered to state listeners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Whether the collaborator is still resolving the session.
    pub is_loading: bool,
}

impl AuthState {
    /// State for a resolved session.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    /// State for a resolved session with nobody signed in.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }
}

/// The external auth service, consumed at its interface boundary only.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// The current identity, or an error if nobody is signed in.
    async fn me(&self) -> Result<User, AuthError>;

    /// Start a sign-in with the hosted auth flow.
    async fn login(&self) -> Result<(), AuthError>;

    /// End the session.
    async fn logout(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use maker_commerce::UserId;

    struct FixedAuth {
        user: Option<User>,
    }

    #[async_trait]
    impl AuthClient for FixedAuth {
        async fn me(&self) -> Result<User, AuthError> {
            self.user.clone().ok_or(AuthError::NotSignedIn)
        }

        async fn login(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn logout(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_me_returns_identity() {
        let auth = FixedAuth {
            user: Some(User::new(UserId::new("u1"), "u1@example.com")),
        };
        let user = auth.me().await.unwrap();
        assert_eq!(user.id, UserId::new("u1"));
    }

    #[tokio::test]
    async fn test_me_without_session_fails() {
        let auth = FixedAuth { user: None };
        assert!(matches!(auth.me().await, Err(AuthError::NotSignedIn)));
    }

    #[test]
    fn test_auth_state_constructors() {
        let user = User::new(UserId::new("u1"), "u1@example.com");
        assert_eq!(
            AuthState::signed_in(user.clone()).user.as_ref(),
            Some(&user)
        );
        assert!(AuthState::signed_out().user.is_none());
    }
}
