//! Session slice: the authenticated user and the OTP login operations.

use crate::models::Profile;
use crate::state::Slice;

/// Transitions of the auth slice.
///
/// Persisting the profile blob is a side effect owned by the store; the
/// reducer only records the in-memory session.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Send-OTP request issued.
    SendOtpPending,
    /// Send-OTP succeeded. No cache mutation — success is signaled by
    /// the operation resolving, which the caller uses to advance the
    /// login step.
    SendOtpFulfilled,
    /// Send-OTP failed.
    SendOtpRejected(String),
    /// Verify-OTP request issued.
    VerifyOtpPending,
    /// Verify-OTP succeeded with the returned profile.
    VerifyOtpFulfilled(Profile),
    /// Verify-OTP failed.
    VerifyOtpRejected(String),
    /// Profile update issued.
    UpdateProfilePending,
    /// Profile update succeeded with the refreshed profile.
    UpdateProfileFulfilled(Profile),
    /// Profile update failed.
    UpdateProfileRejected(String),
    /// Synchronous logout.
    Logout,
    /// Synchronous hydration from a previously persisted profile at
    /// startup.
    SetUser(Profile),
}

/// Session state.
#[derive(Debug, Default)]
pub struct AuthState {
    /// The authenticated user's profile (includes the bearer token).
    pub user: Option<Profile>,
    /// Whether a session is active.
    pub is_authenticated: bool,
    /// Whether an auth operation is in flight.
    pub loading: bool,
    /// Last error message, cleared when a new operation starts.
    pub error: Option<String>,
}

impl AuthState {
    /// Returns the bearer token of the active session, if any.
    #[inline]
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|profile| profile.token.as_str())
    }
}

impl Slice for AuthState {
    type Action = AuthAction;

    fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::SendOtpPending
            | AuthAction::VerifyOtpPending
            | AuthAction::UpdateProfilePending => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::SendOtpFulfilled => {
                self.loading = false;
            }
            AuthAction::VerifyOtpFulfilled(profile) => {
                self.loading = false;
                self.user = Some(profile);
                self.is_authenticated = true;
            }
            AuthAction::UpdateProfileFulfilled(profile) => {
                self.loading = false;
                self.user = Some(profile);
            }
            AuthAction::SendOtpRejected(message)
            | AuthAction::VerifyOtpRejected(message)
            | AuthAction::UpdateProfileRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            AuthAction::Logout => {
                self.user = None;
                self.is_authenticated = false;
                self.error = None;
            }
            AuthAction::SetUser(profile) => {
                self.user = Some(profile);
                self.is_authenticated = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a profile fixture.
    fn profile(token: &str) -> Profile {
        Profile {
            id: None,
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            phone: None,
            role: None,
            token: token.to_owned(),
        }
    }

    #[test]
    fn send_otp_lifecycle_touches_only_flags() {
        let mut state = AuthState::default();
        state.apply(AuthAction::SendOtpPending);
        assert!(state.loading);
        assert!(state.error.is_none());

        state.apply(AuthAction::SendOtpFulfilled);
        assert!(!state.loading);
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn verify_otp_fulfilled_authenticates() {
        let mut state = AuthState::default();
        state.apply(AuthAction::VerifyOtpPending);
        state.apply(AuthAction::VerifyOtpFulfilled(profile("t1")));
        assert!(state.is_authenticated);
        assert_eq!(state.token(), Some("t1"));
        assert!(!state.loading);
    }

    #[test]
    fn verify_otp_rejected_records_error_keeps_unauthenticated() {
        let mut state = AuthState::default();
        state.apply(AuthAction::VerifyOtpPending);
        state.apply(AuthAction::VerifyOtpRejected("Invalid OTP".to_owned()));
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Invalid OTP"));
    }

    #[test]
    fn pending_clears_previous_error() {
        let mut state = AuthState::default();
        state.apply(AuthAction::SendOtpRejected("boom".to_owned()));
        state.apply(AuthAction::SendOtpPending);
        assert!(state.error.is_none());
    }

    #[test]
    fn update_profile_replaces_user_without_touching_auth_flag() {
        let mut state = AuthState::default();
        state.apply(AuthAction::SetUser(profile("t1")));
        state.apply(AuthAction::UpdateProfileFulfilled(Profile {
            name: "B".to_owned(),
            ..profile("t2")
        }));
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("B"));
        assert_eq!(state.token(), Some("t2"));
    }

    #[test]
    fn logout_resets_session() {
        let mut state = AuthState::default();
        state.apply(AuthAction::SetUser(profile("t1")));
        state.apply(AuthAction::Logout);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token().is_none());
    }

    #[test]
    fn set_user_hydrates_session() {
        let mut state = AuthState::default();
        state.apply(AuthAction::SetUser(profile("persisted")));
        assert!(state.is_authenticated);
        assert_eq!(state.token(), Some("persisted"));
    }
}
