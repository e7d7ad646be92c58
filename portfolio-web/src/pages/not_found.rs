//! 404 page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"This sector of the galaxy is uncharted."</p>
                <A href="/">
                    <span class="btn btn-primary" style="margin-top: 20px; display: inline-block;">
                        "Return to Base"
                    </span>
                </A>
            </div>
        </div>
    }
}
