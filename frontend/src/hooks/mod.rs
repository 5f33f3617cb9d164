pub mod use_fee_items;

use yew::prelude::*;

use crate::context::AuthContext;

/// Access the auth context from anywhere under the provider.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider is mounted at the app root")
}
