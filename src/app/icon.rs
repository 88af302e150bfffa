use leptos::prelude::*;

use crate::icons::{Icon, VIEW_BOX};

/// Renders `icon` as an inline stroke SVG in the current text colour.
#[component]
pub fn IconSvg(
    #[prop(into)] icon: Signal<Icon>,
    #[prop(default = "20")] size: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox=VIEW_BOX
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=move || icon.get().name()
            class=class
        >
            {move || {
                icon.get().paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()
            }}
        </svg>
    }
}
