use leptos::prelude::*;

/// Section component - titled wrapper with an anchor id
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id>
            <h2 class="font-bold uppercase mb-3">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-[var(--ink-light)] mb-6">{s}</p> })}
            <div>{children()}</div>
        </section>
    }
}
