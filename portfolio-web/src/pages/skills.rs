//! Skills section

use leptos::prelude::*;

use super::about::SectionTitle;
use crate::utils::content::{SkillCategory, SKILL_CATEGORIES};

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <section id="skills" class="section active">
            <div class="container">
                <SectionTitle text="Power-Ups & Abilities"/>
                <div class="skills-container">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillCategoryCard category=category/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let skills = category
        .skills
        .iter()
        .map(|skill| {
            view! {
                <div class="skill-item" data-level=skill.level.to_string()>
                    <div class="skill-icon">{skill.icon}</div>
                    <div class="skill-info">
                        <span class="skill-name">{skill.name}</span>
                        <div class="skill-bar">
                            <div class="skill-progress" style=format!("--width: {}%", skill.level)></div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="skill-category">
            <h3 class="category-title">
                <span class="category-icon">{category.icon}</span>
                {category.title}
            </h3>
            <div class="skills-grid">{skills}</div>
        </div>
    }
}
