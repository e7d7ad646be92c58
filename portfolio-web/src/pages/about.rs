//! About section: terminal-styled bio and the animated stats panel.

use leptos::prelude::*;

use crate::components::StatCard;
use crate::utils::content::{INTERESTS, STATISTICS};

const PROMPT: &str = "rebel@universe:~$";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section id="about" class="section active">
            <div class="container">
                <SectionTitle text="About the Rebel"/>
                <div class="about-content">
                    <div class="about-text">
                        <div class="terminal-window">
                            <div class="terminal-header">
                                <div class="terminal-buttons">
                                    <span class="btn-close"></span>
                                    <span class="btn-minimize"></span>
                                    <span class="btn-maximize"></span>
                                </div>
                                <span class="terminal-title">"about_me.exe"</span>
                            </div>
                            <div class="terminal-body">
                                <TerminalCommand command="whoami"/>
                                <p class="terminal-output">
                                    "A passionate Computer Engineering student who believes that the best code \
                                     is written with a touch of rebellion and a lot of creativity. I'm the type \
                                     who stays up until 3 AM debugging code just because \"it's almost working!\""
                                </p>
                                <TerminalCommand command="cat interests.txt"/>
                                <p class="terminal-output">
                                    {INTERESTS
                                        .iter()
                                        .map(|interest| view! { {*interest}<br/> })
                                        .collect_view()}
                                </p>
                                <TerminalCommand command="echo $MOTTO"/>
                                <p class="terminal-output">
                                    "\"Code like nobody's watching, debug like everybody is!\""
                                </p>
                                <span class="cursor-blink">"_"</span>
                            </div>
                        </div>
                    </div>
                    // Counters start when this panel mounts.
                    <div class="about-stats">
                        {STATISTICS.iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TerminalCommand(command: &'static str) -> impl IntoView {
    view! {
        <p class="terminal-line">
            <span class="prompt">{PROMPT}</span>
            <span class="command">{command}</span>
        </p>
    }
}

/// Heading shared by every content section.
#[component]
pub fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title">
            <span class="title-text">{text}</span>
            <div class="title-underline"></div>
        </h2>
    }
}
