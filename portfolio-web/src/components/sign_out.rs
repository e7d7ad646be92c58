//! Sign-out control

use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = use_session_context();
    let name = move || session.user().map(|user| user.display_name()).unwrap_or_default();

    view! {
        <button
            class="sign-out-btn"
            title=move || format!("Signed in as {}", name())
            on:click=move |_| {
                if let Err(err) = session.sign_out() {
                    log::warn!("Sign-out left a stale session: {}", err);
                }
            }
        >
            "🚪 Sign Out"
        </button>
    }
}
