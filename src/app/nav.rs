use leptos::prelude::*;

use super::icon::IconSvg;
use super::theme::{use_theme, ModeToggle};
use crate::profile::{SocialLink, SOCIAL_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class="sticky top-0 z-50 w-full flex h-16 items-center justify-between border-b-2 border-accent backdrop-blur-lg shadow-lg">
            <a href="/" class="flex items-center ml-4">
                <img
                    src=move || theme.resolved.get().logo_src()
                    alt="logo_full"
                    width="200"
                    height="200"
                />
            </a>
            <ul class="flex justify-center items-center space-x-4 mr-4 gap-2">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <SocialButton link=*link />
                            </li>
                        }
                    })
                    .collect_view()}
                <li>
                    <ModeToggle />
                </li>
            </ul>
        </nav>
    }
}

#[component]
pub fn SocialButton(link: SocialLink) -> impl IntoView {
    let (target, rel) = if link.opens_new_tab() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=link.href()
            target=target
            rel=rel
            class="inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-accent transition-colors duration-200"
        >
            <IconSvg icon=link.icon() />
            <span class="sr-only">{link.label}</span>
        </a>
    }
}
