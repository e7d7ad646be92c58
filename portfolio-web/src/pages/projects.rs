//! Projects section

use leptos::prelude::*;

use super::about::SectionTitle;
use crate::utils::content::{Project, PROJECTS};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section id="projects" class="section active">
            <div class="container">
                <SectionTitle text="Epic Builds"/>
                <div class="projects-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card" data-tech=project.tech.join(", ")>
            <div class="project-image">
                <div class="project-placeholder">
                    <span class="project-icon">{project.icon}</span>
                </div>
                <div class="project-overlay">
                    <button class="btn btn-small">{project.demo_label}</button>
                    <button class="btn btn-small btn-outline">"GitHub"</button>
                </div>
            </div>
            <div class="project-info">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">
                    {project.tech.iter().map(|tech| view! { <span class="tech-tag">{*tech}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
