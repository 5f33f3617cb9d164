use std::rc::Rc;

use gloo::storage::{LocalStorage, Storage};
use shared::{AuthUser, LoginResponse, UserRole};
use yew::prelude::*;

use crate::services::logging::Logger;

/// LocalStorage key holding the bearer token. The API client deletes this
/// key when the backend answers 401, which sends the next render through
/// the login gate.
pub const TOKEN_KEY: &str = "bursar.token";

/// LocalStorage key holding the signed-in user snapshot.
pub const USER_KEY: &str = "bursar.user";

/// Process-wide authentication state backing route protection.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
}

impl AuthState {
    /// Rehydrate a session persisted by a previous visit. Both halves must
    /// be present; a token without its user (or vice versa) is discarded.
    pub fn restore() -> Self {
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let user: Option<AuthUser> = LocalStorage::get(USER_KEY).ok();
        match (token, user) {
            (Some(token), Some(user)) => Self {
                user: Some(user),
                token: Some(token),
            },
            _ => Self {
                user: None,
                token: None,
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn is_finance(&self) -> bool {
        matches!(self.user.as_ref(), Some(user) if user.role == UserRole::Finance)
    }
}

pub enum AuthAction {
    LoggedIn(Box<LoginResponse>),
    LoggedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoggedIn(response) => {
                let user = response.to_user();
                if LocalStorage::set(TOKEN_KEY, &response.access_token).is_err()
                    || LocalStorage::set(USER_KEY, &user).is_err()
                {
                    Logger::warn_with_component(
                        "auth",
                        "could not persist session, sign-in will not survive a reload",
                    );
                }
                Rc::new(AuthState {
                    user: Some(user),
                    token: Some(response.access_token),
                })
            }
            AuthAction::LoggedOut => {
                LocalStorage::delete(TOKEN_KEY);
                LocalStorage::delete(USER_KEY);
                Rc::new(AuthState {
                    user: None,
                    token: None,
                })
            }
        }
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(AuthState::restore);

    html! {
        <ContextProvider<AuthContext> context={state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
