use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use super::icon::IconSvg;
use super::nav::SocialButton;
use super::theme::use_theme;
#[cfg(feature = "ssr")]
use crate::highlight::highlight_snippets;
use crate::highlight::{HighlightedSnippet, GLOBAL_SNIPPET_CACHE};
use crate::icons::Icon;
use crate::profile::{mailto, FULL_NAME, INTRO, ROLE, SOCIAL_LINKS};
use crate::schedule::BrowserScheduler;
use crate::snippets::{CycleDriver, CyclePhase, SnippetCycle, SNIPPETS};
use crate::theme::ResolvedTheme;

#[server(input = GetUrl)]
pub async fn get_highlighted_snippets(
    theme: ResolvedTheme,
) -> Result<Vec<HighlightedSnippet>, ServerFnError> {
    highlight_snippets(theme).map_err(|e| {
        tracing::warn!("{e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="w-full flex items-center justify-center py-12 md:py-24 lg:py-32 xl:py-48 h-screen">
            <div class="container px-4 md:px-6">
                <div class="grid gap-6 lg:grid-cols-[1fr_500px] lg:gap-12 xl:grid-cols-[1fr_600px]">
                    <div class="flex flex-col justify-center space-y-4">
                        <div class="space-y-2">
                            <h1 class="text-3xl font-bold tracking-tighter sm:text-5xl xl:text-6xl/none">
                                {FULL_NAME}
                            </h1>
                            <p class="text-xl text-muted-foreground">{ROLE}</p>
                        </div>
                        <p class="max-w-[600px] text-muted-foreground md:text-xl">{INTRO}</p>
                        <div class="flex flex-col gap-2 min-[400px]:flex-row">
                            <a
                                href="#projects"
                                class="inline-flex items-center justify-center rounded-md bg-foreground text-background px-4 py-2 font-medium transition-colors duration-200"
                            >
                                "View My Work"
                                <IconSvg icon=Icon::ArrowRight size="16" class="ml-2" />
                            </a>
                            <a
                                href=mailto()
                                class="inline-flex items-center justify-center rounded-md border border-border px-4 py-2 font-medium hover:bg-accent transition-colors duration-200"
                            >
                                "Get In Touch"
                            </a>
                        </div>
                        <div class="flex items-center gap-4 pt-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! { <SocialButton link=*link /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center justify-center">
                        <CodeViewer />
                    </div>
                </div>
            </div>
        </section>
    }
}

fn plain_snippet(index: usize) -> HighlightedSnippet {
    SNIPPETS
        .get(index)
        .map(|s| HighlightedSnippet::plain(s.code))
        .unwrap_or_default()
}

#[component]
fn CodeViewer() -> impl IntoView {
    let theme = use_theme();
    let (cycle, set_cycle) = signal(SnippetCycle::new(SNIPPETS.len()));

    // effects only run in the browser, so no timers start during SSR
    Effect::new(move |_| {
        let driver = CycleDriver::start(BrowserScheduler, SNIPPETS.len(), move |c| {
            if c.phase() == CyclePhase::Entering {
                log::debug!("showing snippet {}", c.index());
            }
            set_cycle.set(c);
        });
        match driver {
            Ok(driver) => on_cleanup(move || driver.stop()),
            Err(e) => log::warn!("{e}, hero snippet stays on the first entry"),
        }
    });

    let highlighted = Resource::new(
        move || theme.resolved.get(),
        move |theme| async move {
            let cache = &*GLOBAL_SNIPPET_CACHE;
            if let Some(s) = cache.get(&theme) {
                return Ok((*s).clone());
            }
            let res = get_highlighted_snippets(theme).await;
            // server side caching happens in highlight_snippets
            #[cfg(feature = "hydrate")]
            if let Ok(s) = &res {
                cache.insert(theme, s.clone());
            }
            res
        },
    );

    view! {
        <div class="code-editor-container w-full h-[250px] md:h-[325px] lg:h-[400px] rounded-lg overflow-hidden border border-border shadow-lg backdrop-blur-md bg-background/70 dark:bg-background/40 transition-all duration-500 ease-in-out">
            <div class="code-editor-header flex items-center justify-between px-4 py-2 bg-muted/80 dark:bg-muted/30 border-b border-border">
                <div class="flex space-x-2">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                </div>
                <div class="text-sm text-foreground/70">
                    {move || cycle.get().current(&SNIPPETS).map(|s| s.display_name)}
                </div>
                <div class="w-4"></div>
            </div>
            <div class="code-editor-content-wrapper h-[calc(100%-40px)] overflow-hidden">
                <div class=move || {
                    format!(
                        "code-editor-content p-4 h-full overflow-auto {}",
                        cycle.get().phase().animation_class(),
                    )
                }>
                    <Transition fallback=move || {
                        view! { <CodeLines snippet=plain_snippet(cycle.get_untracked().index()) /> }
                    }>
                        {move || {
                            let index = cycle.get().index();
                            Suspend::new(async move {
                                let snippet = match highlighted.await {
                                    Ok(all) => all.get(index).cloned(),
                                    Err(e) => {
                                        log::warn!("{e}, showing plain snippet");
                                        None
                                    }
                                };
                                let snippet = snippet.unwrap_or_else(|| plain_snippet(index));
                                view! { <CodeLines snippet /> }
                            })
                        }}
                    </Transition>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CodeLines(snippet: HighlightedSnippet) -> impl IntoView {
    view! {
        <pre class="text-sm md:text-base font-mono bg-transparent">
            {snippet
                .lines
                .into_iter()
                .map(|line| {
                    let empty = line.is_empty();
                    view! {
                        <div>
                            {line
                                .into_iter()
                                .map(|t| {
                                    let style = t.style();
                                    view! { <span style=style>{t.text}</span> }
                                })
                                .collect_view()}
                            {empty.then_some(" ")}
                        </div>
                    }
                })
                .collect_view()}
        </pre>
    }
}
