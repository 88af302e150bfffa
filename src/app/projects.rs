use leptos::{html::Div, prelude::*};

use super::icon::IconSvg;
use super::reveal::use_reveal;
use crate::projects::{Project, ProjectAction, PROJECTS};
use crate::reveal::{reveal_classes, RevealOffset};

#[component]
pub fn Projects() -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let revealed = use_reveal(target);

    view! {
        <section id="projects" class="w-full py-16 md:py-24 flex justify-center">
            <div class="container px-4 md:px-6">
                <div
                    node_ref=target
                    class=move || {
                        format!(
                            "mb-12 text-center transition-all duration-500 ease-out {}",
                            reveal_classes(revealed.get(), RevealOffset::Small),
                        )
                    }
                >
                    <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                        "My Projects"
                    </h1>
                    <p class="mt-4 text-muted-foreground md:text-xl">
                        "A collection of projects I've worked on"
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="flex flex-col h-full animate-fade-up"
            style=format!(
                "animation-duration: 400ms; animation-delay: {}ms",
                Project::enter_delay_ms(index),
            )
        >
            <div class="group relative flex flex-col h-full overflow-hidden rounded-lg border border-border bg-background/50 backdrop-blur-sm transition-all duration-300 hover:shadow-lg hover:shadow-foreground/5">
                <div class="flex items-center gap-4 border-b border-border p-4 pl-6">
                    <div class="relative h-12 w-12 overflow-hidden rounded-md bg-muted">
                        <img
                            src=project.logo_src()
                            alt=format!("{} logo", project.title)
                            class="h-full w-full object-cover"
                        />
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold">{project.title}</h3>
                        {project
                            .featured
                            .then(|| {
                                view! {
                                    <span class="mt-1 inline-block rounded-md bg-secondary px-2 py-0.5 text-xs font-medium">
                                        "Featured Project"
                                    </span>
                                }
                            })}
                    </div>
                </div>

                <div class="flex-grow p-4">
                    <p class="mb-4 text-muted-foreground">{project.description}</p>
                    <div class="mb-6 flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="rounded-md border border-border px-2 py-0.5 text-xs">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex items-center justify-end gap-2 border-t border-border p-4">
                    {project
                        .actions()
                        .into_iter()
                        .map(|action| view! { <ActionButton action /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ActionButton(action: ProjectAction) -> impl IntoView {
    let class = match action {
        ProjectAction::Code(_) => {
            "inline-flex items-center rounded-md border border-border px-3 py-1.5 text-sm hover:bg-accent transition-colors duration-200"
        }
        ProjectAction::LiveDemo(_) => {
            "inline-flex items-center rounded-md bg-foreground text-background px-3 py-1.5 text-sm transition-colors duration-200"
        }
    };
    view! {
        <a href=action.href() target="_blank" rel="noopener noreferrer" class=class>
            <IconSvg icon=action.icon() size="16" class="mr-2" />
            {action.label()}
        </a>
    }
}
