//! Sign-in page shown while no session is present.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::dto::{SignInFlow, SignInRequest};

use crate::state::session::use_session_context;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (flow, set_flow) = signal(SignInFlow::SignIn);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        let request = SignInRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            flow: flow.get_untracked(),
        };
        match session.sign_in(&request) {
            Ok(_) => set_error.set(None),
            Err(err) => {
                log::warn!("Sign-in rejected: {}", err);
                set_error.set(Some(err.user_message()));
            }
        }
        set_submitting.set(false);
    };

    let sign_in_anonymously = move |_| match session.sign_in_anonymously() {
        Ok(_) => set_error.set(None),
        Err(err) => {
            log::warn!("Anonymous sign-in failed: {}", err);
            set_error.set(Some(err.user_message()));
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h1 class="auth-title">
                    <span class="pixel-text">"DIGITAL_REBEL.exe"</span>
                </h1>
                <p class="auth-subtitle">
                    {move || match flow.get() {
                        SignInFlow::SignIn => "Sign in to explore the portfolio",
                        SignInFlow::SignUp => "Create an account to explore the portfolio",
                    }}
                </p>

                {move || error.get().map(|err| view! {
                    <div class="error">
                        <p>{err}</p>
                    </div>
                })}

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="input-field"
                        type="email"
                        name="email"
                        placeholder="Email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                    <input
                        class="input-field"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />
                    <button
                        class="btn btn-primary btn-full"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {move || flow.get().submit_label()}
                    </button>
                    <p class="auth-note">"Accounts are kept in this browser only."</p>
                </form>

                <div class="auth-switch">
                    <span>
                        {move || match flow.get() {
                            SignInFlow::SignIn => "Don't have an account? ",
                            SignInFlow::SignUp => "Already have an account? ",
                        }}
                    </span>
                    <button
                        class="link-button"
                        type="button"
                        on:click=move |_| {
                            set_flow.update(|flow| *flow = flow.toggled());
                            set_error.set(None);
                        }
                    >
                        {move || match flow.get() {
                            SignInFlow::SignIn => "Sign up instead",
                            SignInFlow::SignUp => "Sign in instead",
                        }}
                    </button>
                </div>

                <div class="auth-divider">
                    <span>"or"</span>
                </div>

                <button
                    class="btn btn-secondary btn-full"
                    type="button"
                    on:click=sign_in_anonymously
                >
                    "Sign in anonymously"
                </button>
            </div>
        </div>
    }
}
