mod hero;
mod icon;
mod nav;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::{DESCRIPTION, SITE_TITLE};

use hero::Hero;
use nav::Nav;
use projects::Projects;
use skills::Skills;
pub use theme::{provide_theme, use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=DESCRIPTION />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-gradient-to-tr from-primary to-secondary text-foreground",
                    theme.resolved.get().class_name(),
                )
            }>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main class="flex flex-col items-center justify-between">
            <Hero />
            <Skills />
            <Projects />
        </main>
    }
}
