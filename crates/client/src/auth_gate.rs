//! Authentication gate and the authenticated shell.
//!
//! ```text
//! Loading ──restore──▶ Authenticated ◀──sign_in / sign_up── Unauthenticated(Login | Register)
//!                            │                                        ▲
//!                            └──request_sign_out → confirm_sign_out───┘
//! ```
//!
//! Main views are only reachable while authenticated.

use std::sync::Arc;

use plano_core::messages;

use crate::confirm::Confirmation;
use crate::error::StoreError;
use crate::guard::{Navigator, View, ViewGuard};
use crate::records::{Session, User};
use crate::store::PlanStore;

/// Which form an unauthenticated user sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Unauthenticated(AuthView),
    Authenticated(User),
}

pub struct AuthGate {
    store: Arc<dyn PlanStore>,
    state: AuthState,
    session: Option<Session>,
    navigator: Navigator,
    sign_out: Confirmation<()>,
    error: Option<&'static str>,
    busy: bool,
}

impl AuthGate {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self {
            store,
            state: AuthState::Loading,
            session: None,
            navigator: Navigator::default(),
            sign_out: Confirmation::new(messages::CONFIRM_SIGN_OUT),
            error: None,
            busy: false,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Refresh token of the live session, for the caller to persist.
    pub fn refresh_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.refresh_token.as_str())
    }

    /// Shared handle for building screens.
    pub fn store(&self) -> Arc<dyn PlanStore> {
        Arc::clone(&self.store)
    }

    /// Resolve `Loading` from a previously saved refresh token, if any.
    ///
    /// A failed restore is not an error for the user: they simply land on
    /// the login form.
    pub async fn restore(&mut self, saved_refresh_token: Option<&str>) {
        if self.state != AuthState::Loading {
            return;
        }

        let Some(token) = saved_refresh_token else {
            self.state = AuthState::Unauthenticated(AuthView::Login);
            return;
        };

        match self.store.restore_session(token).await {
            Ok(session) => self.establish(session),
            Err(err) => {
                tracing::warn!(error = %err, "Session restore failed");
                self.state = AuthState::Unauthenticated(AuthView::Login);
            }
        }
    }

    pub fn show_register(&mut self) {
        self.switch_form(AuthView::Register);
    }

    pub fn show_login(&mut self) {
        self.switch_form(AuthView::Login);
    }

    fn switch_form(&mut self, view: AuthView) {
        if let AuthState::Unauthenticated(current) = &mut self.state {
            *current = view;
            self.error = None;
        }
    }

    /// Returns `true` when the gate moved to `Authenticated`.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> bool {
        self.authenticate(AuthView::Login, email, password).await
    }

    /// Returns `true` when the gate moved to `Authenticated`.
    pub async fn sign_up(&mut self, email: &str, password: &str) -> bool {
        self.authenticate(AuthView::Register, email, password).await
    }

    async fn authenticate(&mut self, form: AuthView, email: &str, password: &str) -> bool {
        if self.state != AuthState::Unauthenticated(form) {
            return false;
        }
        if email.trim().is_empty() || password.is_empty() {
            self.error = Some(messages::FILL_ALL_FIELDS);
            return false;
        }

        self.busy = true;
        self.error = None;
        let result = match form {
            AuthView::Login => self.store.sign_in(email, password).await,
            AuthView::Register => self.store.sign_up(email, password).await,
        };
        self.busy = false;

        match result {
            Ok(session) => {
                self.establish(session);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, ?form, "Authentication failed");
                self.error = Some(match form {
                    AuthView::Login => messages::LOGIN_FAILED,
                    AuthView::Register => messages::REGISTER_FAILED,
                });
                false
            }
        }
    }

    fn establish(&mut self, session: Session) {
        tracing::info!(user_id = session.user.id, "Session established");
        self.state = AuthState::Authenticated(session.user.clone());
        self.session = Some(session);
        self.error = None;
    }

    // ---- authenticated shell ----

    pub fn current_view(&self) -> Option<View> {
        self.user().map(|_| self.navigator.current())
    }

    /// Guard for the view currently on display.
    pub fn mount(&self) -> Option<ViewGuard> {
        self.user().map(|_| self.navigator.mount())
    }

    /// Switch the main view. Ignored unless authenticated.
    pub fn navigate(&mut self, view: View) -> Option<ViewGuard> {
        self.user()?;
        Some(self.navigator.navigate(view))
    }

    pub fn request_sign_out(&mut self) {
        if self.user().is_some() {
            self.sign_out.request(());
        }
    }

    pub fn sign_out_prompt(&self) -> Option<&'static str> {
        self.sign_out.prompt()
    }

    /// Leaves session and current view untouched.
    pub fn decline_sign_out(&mut self) {
        self.sign_out.decline();
    }

    /// Revoke the session at the store and return to the login form.
    ///
    /// Does nothing unless a sign-out was requested. A store that no longer
    /// accepts the session counts as signed out. On any other failure the
    /// session is kept and [`messages::SIGN_OUT_FAILED`] is shown.
    pub async fn confirm_sign_out(&mut self) {
        if self.sign_out.confirm().is_none() {
            return;
        }

        self.busy = true;
        let result = self.store.sign_out().await;
        self.busy = false;

        match result {
            Ok(()) | Err(StoreError::Unauthorized(_)) => {
                tracing::info!("Signed out");
                self.session = None;
                self.navigator.reset();
                self.error = None;
                self.state = AuthState::Unauthenticated(AuthView::Login);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-out failed");
                self.error = Some(messages::SIGN_OUT_FAILED);
            }
        }
    }
}
