use leptos::{html::Div, prelude::*};

use super::icon::IconSvg;
use super::reveal::use_reveal;
use crate::reveal::{reveal_classes, RevealOffset};
use crate::skills::{TechCategory, Technology, TECHNOLOGIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="w-full py-16 flex justify-center md:py-24 bg-gradient-to-bl from-primary to-secondary">
            <div class="container px-4 md:px-6">
                <div class="mb-12 text-center animate-fade-up">
                    <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                        "Technologies & Skills"
                    </h1>
                    <p class="mt-4 text-muted-foreground md:text-xl">
                        "The tools and technologies I use to bring products to life"
                    </p>
                </div>
                <div class="space-y-16">
                    {TECHNOLOGIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! { <CategorySection category=*category index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategorySection(category: TechCategory, index: usize) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let revealed = use_reveal(target);

    view! {
        <div
            node_ref=target
            class=move || {
                format!(
                    "mb-16 transition-all duration-500 ease-out {}",
                    reveal_classes(revealed.get(), RevealOffset::Large),
                )
            }
            style=format!("transition-delay: {}ms", TechCategory::enter_delay_ms(index))
        >
            <h2 class="text-2xl font-bold mb-6">{category.category}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {category
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! { <TechnologyCard tech=*tech index=i category_index=index /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TechnologyCard(tech: Technology, index: usize, category_index: usize) -> impl IntoView {
    view! {
        <div
            class="w-full animate-fade-up"
            style=format!(
                "animation-duration: 300ms; animation-delay: {}ms",
                Technology::enter_delay_ms(index, category_index),
            )
        >
            <div class=format!(
                "tech-card bg-gradient-to-br {} backdrop-blur-sm border border-white/10 rounded-xl p-6 h-full transition-all duration-300 hover:scale-[1.02] hover:shadow-lg",
                tech.color,
            )>
                <div class="flex items-start space-x-4">
                    <div class="p-2 rounded-full bg-background/10 backdrop-blur-md">
                        <IconSvg icon=tech.icon size="24" />
                    </div>
                    <div class="space-y-2">
                        <h3 class="font-medium text-lg">{tech.name}</h3>
                        <p class="text-sm text-muted-foreground">{tech.description}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
