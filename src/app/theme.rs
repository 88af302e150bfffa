use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use super::icon::IconSvg;
use crate::theme::{ResolvedTheme, Theme};

/// Site-wide theme, provided once by `App`.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    pub resolved: Signal<ResolvedTheme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.next());
    }
}

pub fn provide_theme() -> ThemeContext {
    let theme = RwSignal::new(Theme::default());
    let prefers_dark = use_preferred_dark();

    // ask the browser to send its colour scheme with the next request
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.insert_header(
                axum::http::HeaderName::from_static("accept-ch"),
                axum::http::HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
            );
        }
    }
    let resolved = Signal::derive(move || theme.get().resolve(prefers_dark.get()));

    // load once after hydration so server and client markup agree
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                theme.set(stored.get_untracked());
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| {
                log::debug!("theme set to {t}");
                set_stored.set(*t);
            },
            false,
        );
    }

    let ctx = ThemeContext { theme, resolved };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            type="button"
            class="inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-accent transition-colors duration-200"
            on:click=move |_| ctx.toggle()
        >
            <IconSvg icon=Signal::derive(move || ctx.theme.get().icon()) />
            <span class="sr-only">{move || format!("Theme: {}", ctx.theme.get())}</span>
        </button>
    }
}
