//! Authentication context, the sign-in modal, and the auth gate.
//!
//! The [`store::SessionStore`] is the durable record of who is signed in.
//! [`AuthState`] mirrors it in a signal so the navbar and the pages re-render
//! on login and logout; every code path that writes one writes the other.

use api::ApiError;
use dioxus::prelude::*;
use store::{AuthRequired, Session};

use crate::modal::Modal;
use crate::notifications::{use_notifier, Notifier};
use crate::platform::{api_client, make_session_store, use_app_config, use_sessions};

pub const MIN_PASSWORD_LEN: usize = 6;

const WELCOME_BACK: &str = "Welcome back! You have been signed in successfully.";
const LOGIN_FAILED: &str = "Invalid email or password. Please try again.";
const REGISTERED: &str = "Account created successfully! You can now sign in.";
const SIGNED_OUT: &str = "You have been signed out successfully.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthModalMode {
    Login,
    Register,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Which form the sign-in modal shows, if open.
    pub modal: Option<AuthModalMode>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Register-form problems caught before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
}

pub fn validate_registration(password: &str, confirm: &str) -> Result<(), AuthFormError> {
    if password != confirm {
        return Err(AuthFormError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthFormError::PasswordTooShort);
    }
    Ok(())
}

/// User-facing text for a failed registration.
pub fn registration_error_message(err: &ApiError) -> &'static str {
    if err.body_contains("Username already exists") {
        "Username already exists. Please choose a different one."
    } else if err.body_contains("Email already exists") {
        "Email already exists. Please use a different email."
    } else {
        "Registration failed. Please try again later."
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Creates the session store, restores any saved session, and renders the
/// sign-in modal when it is open. Must sit inside a
/// [`NotificationProvider`](crate::NotificationProvider).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let sessions = use_context_provider(make_session_store);
    use_context_provider(|| {
        Signal::new(AuthState {
            session: sessions.require_auth().ok(),
            modal: None,
        })
    });

    rsx! {
        {children}
        AuthModal {}
    }
}

/// Synchronous sign-in check for actions that need a session.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthGate {
    auth: Signal<AuthState>,
    notifier: Notifier,
}

impl AuthGate {
    /// The current session, or: notify, open the login form, and return
    /// `Err`. Callers stop; the user retries after signing in.
    pub fn require_auth(&self) -> Result<Session, AuthRequired> {
        let session = self.auth.peek().session.clone();
        session.ok_or_else(|| {
            self.deny(AuthRequired);
            AuthRequired
        })
    }

    /// Tell the user why and open the login form.
    pub fn deny(&self, reason: AuthRequired) {
        self.notifier.error(reason.to_string());
        self.show_login();
    }

    pub fn show_login(&self) {
        let mut auth = self.auth;
        auth.write().modal = Some(AuthModalMode::Login);
    }
}

pub fn use_auth_gate() -> AuthGate {
    AuthGate {
        auth: use_auth(),
        notifier: use_notifier(),
    }
}

#[component]
fn AuthModal() -> Element {
    let mut auth = use_auth();
    let Some(mode) = auth.read().modal else {
        return rsx! {};
    };
    let title = match mode {
        AuthModalMode::Login => "Welcome Back",
        AuthModalMode::Register => "Create Account",
    };

    rsx! {
        Modal {
            title: title.to_string(),
            class: "modal-card auth-modal",
            on_close: move |_| auth.write().modal = None,
            if mode == AuthModalMode::Login {
                LoginForm {}
            } else {
                RegisterForm {}
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let config = use_app_config();
    let notifier = use_notifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let sessions = sessions.clone();
        let client = api_client(&config, None);
        spawn(async move {
            busy.set(true);
            let e = email().trim().to_string();
            match client.login(&e, &password()).await {
                Ok(login) => {
                    sessions.login(&login.token, &login.user);
                    auth.set(AuthState {
                        session: sessions.session(),
                        modal: None,
                    });
                    notifier.success(WELCOME_BACK);
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    notifier.error(LOGIN_FAILED);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: on_submit,
            label { r#for: "login-email", "Email" }
            input {
                id: "login-email",
                r#type: "email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "login-password", "Password" }
            input {
                id: "login-password",
                r#type: "password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Signing in..." } else { "Sign In" }
            }
            p {
                class: "auth-switch",
                "Don't have an account? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        auth.write().modal = Some(AuthModalMode::Register);
                    },
                    "Sign up"
                }
            }
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let mut auth = use_auth();
    let config = use_app_config();
    let notifier = use_notifier();
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = validate_registration(&password(), &confirm()) {
            notifier.error(e.to_string());
            return;
        }
        let client = api_client(&config, None);
        spawn(async move {
            busy.set(true);
            let result = client
                .register(email().trim(), username().trim(), &password())
                .await;
            match result {
                Ok(_) => {
                    notifier.success(REGISTERED);
                    auth.write().modal = Some(AuthModalMode::Login);
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    notifier.error(registration_error_message(&err));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: on_submit,
            label { r#for: "register-email", "Email" }
            input {
                id: "register-email",
                r#type: "email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "register-username", "Username" }
            input {
                id: "register-username",
                r#type: "text",
                required: true,
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            label { r#for: "register-password", "Password" }
            input {
                id: "register-password",
                r#type: "password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            label { r#for: "register-confirm", "Confirm Password" }
            input {
                id: "register-confirm",
                r#type: "password",
                required: true,
                value: confirm(),
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Creating account..." } else { "Sign Up" }
            }
            p {
                class: "auth-switch",
                "Already have an account? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        auth.write().modal = Some(AuthModalMode::Login);
                    },
                    "Sign in"
                }
            }
        }
    }
}

/// Button to sign out. `on_logout` runs after the session is cleared.
#[component]
pub fn LogoutButton(
    on_logout: Option<EventHandler<()>>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn btn-outline".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let notifier = use_notifier();

    let onclick = move |_| {
        sessions.logout();
        auth.write().session = None;
        notifier.success(SIGNED_OUT);
        if let Some(handler) = on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Navbar auth area: greeting, Dashboard and Logout when signed in; Login and
/// Sign Up otherwise.
#[component]
pub fn AuthControls(on_dashboard: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let session = auth.read().session.clone();

    match session {
        Some(session) => {
            let name = session.display_name().unwrap_or("there").to_string();
            rsx! {
                div {
                    class: "auth-controls",
                    span { class: "user-greeting", "Hi, {name}!" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_dashboard.call(()),
                        "Dashboard"
                    }
                    LogoutButton { on_logout }
                }
            }
        }
        None => rsx! {
            div {
                class: "auth-controls",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| auth.write().modal = Some(AuthModalMode::Login),
                    "Login"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| auth.write().modal = Some(AuthModalMode::Register),
                    "Sign Up"
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_registration() {
        assert_eq!(validate_registration("secret1", "secret1"), Ok(()));
        assert_eq!(
            validate_registration("secret1", "secret2"),
            Err(AuthFormError::PasswordMismatch)
        );
        // Mismatch is reported before length
        assert_eq!(
            validate_registration("abc", "abd"),
            Err(AuthFormError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration("abcde", "abcde"),
            Err(AuthFormError::PasswordTooShort)
        );
        assert_eq!(validate_registration("abcdef", "abcdef"), Ok(()));
        assert_eq!(
            AuthFormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn test_registration_error_messages() {
        let taken = |body: &str| ApiError::Status {
            status: 400,
            body: body.to_string(),
        };
        assert_eq!(
            registration_error_message(&taken("Username already exists")),
            "Username already exists. Please choose a different one."
        );
        assert_eq!(
            registration_error_message(&taken("Email already exists")),
            "Email already exists. Please use a different email."
        );
        assert_eq!(
            registration_error_message(&taken("boom")),
            "Registration failed. Please try again later."
        );
    }

    #[test]
    fn test_auth_state() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());
        state.session = Some(Session {
            token: "t".to_string(),
            user: None,
        });
        assert!(state.is_authenticated());
    }
}
