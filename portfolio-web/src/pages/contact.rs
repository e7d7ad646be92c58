//! Contact section: info cards, social links and the message form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::about::SectionTitle;
use crate::utils::content::SOCIAL_LINKS;

#[component]
pub fn ContactPage() -> impl IntoView {
    // There is no mail backend; the form only stays on the page.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("Contact form submitted");
    };

    view! {
        <section id="contact" class="section active">
            <div class="container">
                <SectionTitle text="Establish Connection"/>
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="contact-card">
                            <div class="contact-icon">"📧"</div>
                            <h3>"Send a Message"</h3>
                            <p>"Ready to collaborate on something awesome? Drop me a line!"</p>
                        </div>
                        <div class="contact-card">
                            <div class="contact-icon">"🌐"</div>
                            <h3>"Connect Online"</h3>
                            <div class="social-links">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a href=link.href class="social-link" title=link.title>
                                                <span class="social-icon">{link.icon}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-icon">"⚡"</div>
                            <h3>"Quick Response"</h3>
                            <p>"I usually respond within 24 hours. Let's build something amazing together!"</p>
                        </div>
                    </div>
                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input type="text" id="name" name="name" required/>
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input type="email" id="email" name="email" required/>
                        </div>
                        <div class="form-group">
                            <label for="subject">"Subject"</label>
                            <input type="text" id="subject" name="subject" required/>
                        </div>
                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea id="message" name="message" rows="5" required></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary btn-full">
                            <span>"Send Message"</span>
                            <div class="btn-particles"></div>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
