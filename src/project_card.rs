use chrono::Utc;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::types::Project;
use crate::utils::{format_relative, initials};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_open: Callback<String>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let onclick = {
        let on_open = props.on_open.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    let avatar_stack = project
        .collaborators
        .iter()
        .take(3)
        .map(|user| {
            html! {
                <span
                    key={user.id.clone()}
                    title={user.name.clone()}
                    class="h-6 w-6 rounded-full bg-gray-200 border-2 border-white flex items-center justify-center text-xs"
                >
                    { initials(&user.name) }
                </span>
            }
        })
        .collect::<Html>();
    let overflow = project.collaborators.len().saturating_sub(3);

    html! {
        <div
            {onclick}
            class="group cursor-pointer bg-white rounded-lg border border-gray-200 shadow-sm transition-all hover:shadow-lg hover:border-violet-300 overflow-hidden"
        >
            <div class="relative">
                <img
                    src={project.thumbnail.clone()}
                    alt={project.name.clone()}
                    class="w-full h-48 object-cover"
                />
                <span class={classes!(
                    "absolute", "top-3", "left-3", "text-xs", "px-2", "py-0.5",
                    "rounded", project.status.badge_class()
                )}>
                    { project.status.label() }
                </span>
            </div>

            <div class="p-4">
                <h3 class="font-semibold text-lg mb-2 group-hover:text-violet-600 transition-colors">
                    { &project.name }
                </h3>
                <p class="text-sm text-gray-500 mb-4 line-clamp-2">{ &project.description }</p>

                <div class="flex items-center space-x-4 text-sm text-gray-500 mb-4">
                    <span>{ format!("\u{1f4ac} {}", project.comments.len()) }</span>
                    <span>{ format!("\u{1f465} {}", project.collaborators.len()) }</span>
                    <span>{ format_relative(&project.last_modified, &Utc::now()) }</span>
                </div>

                <div class="flex items-center justify-between">
                    <div class="flex -space-x-2">
                        {avatar_stack}
                        if overflow > 0 {
                            <span class="h-6 w-6 rounded-full bg-gray-100 border-2 border-white flex items-center justify-center text-xs text-gray-500">
                                { format!("+{overflow}") }
                            </span>
                        }
                    </div>
                    <div class="flex items-center space-x-1">
                        <span
                            title={project.owner.name.clone()}
                            class="h-6 w-6 rounded-full bg-gray-200 flex items-center justify-center text-xs"
                        >
                            { initials(&project.owner.name) }
                        </span>
                        <span class="text-xs text-gray-500">{"Owner"}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
