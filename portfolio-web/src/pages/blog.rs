//! Blog section

use leptos::prelude::*;

use super::about::SectionTitle;
use crate::utils::content::BLOG_POSTS;

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = BLOG_POSTS
        .iter()
        .map(|post| {
            view! {
                <article class="blog-card">
                    <div class="blog-image">
                        <span class="blog-icon">{post.icon}</span>
                    </div>
                    <div class="blog-content">
                        <div class="blog-date">{post.date}</div>
                        <h3 class="blog-title">{post.title}</h3>
                        <p class="blog-excerpt">{post.excerpt}</p>
                        <div class="blog-tags">
                            {post.tags.iter().map(|tag| view! { <span class="blog-tag">{*tag}</span> }).collect_view()}
                        </div>
                        <button class="btn btn-small btn-outline">"Read More"</button>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="blog" class="section active">
            <div class="container">
                <SectionTitle text="Digital Chronicles"/>
                <div class="blog-grid">{posts}</div>
            </div>
        </section>
    }
}
