use yew::prelude::*;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::comments_panel::CommentsPanel;
use crate::design_canvas::DesignCanvas;
use crate::fixtures;
use crate::team_panel::TeamPanel;
use crate::tools_panel::ToolsPanel;
use crate::types::{DesignElement, Point, SideTab, Tool};
use crate::utils::{format_date, initials};
use crate::versions_panel::VersionsPanel;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub id: String,
    pub on_back: Callback<()>,
}

/// Owns the authoritative in-memory copy of the selected project and wires
/// the canvas to the comment/selection handlers and the tabbed side panel.
#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let project = use_state(|| fixtures::find_project(&props.id));
    let selected_element = use_state(|| None::<DesignElement>);
    let tool = use_state(|| Tool::Select);
    let show_comments = use_state(|| true);
    let new_comment = use_state(String::new);
    let selected_comment_id = use_state(|| None::<String>);
    let side_tab = use_state(|| SideTab::Comments);

    // Re-run the fixture lookup when navigating between projects.
    {
        let project = project.clone();
        let selected_element = selected_element.clone();
        use_effect_with(props.id.clone(), move |id| {
            let found = fixtures::find_project(id);
            if found.is_none() {
                log::warn!("project {id} not found in fixture set");
            }
            project.set(found);
            selected_element.set(None);
        });
    }

    // Cmd/Ctrl+K toggles comment visibility.
    {
        let show_comments = show_comments.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");

            let listener = EventListener::new(&document, "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    if (keyboard_event.meta_key() || keyboard_event.ctrl_key())
                        && keyboard_event.key() == "k"
                    {
                        keyboard_event.prevent_default();
                        show_comments.set(!*show_comments);
                    }
                }
            });

            move || drop(listener)
        });
    }

    let Some(current) = (*project).clone() else {
        return html! {
            <div class="flex items-center justify-center h-[calc(100vh-4rem)]">
                <p class="text-lg text-gray-500">{"Project not found"}</p>
            </div>
        };
    };

    let on_comment_add = {
        let project = project.clone();
        let new_comment = new_comment.clone();
        let tool = tool.clone();
        Callback::from(move |position: Point| {
            if let Some(mut p) = (*project).clone() {
                if p.add_comment(new_comment.as_str(), position) {
                    project.set(Some(p));
                    new_comment.set(String::new());
                    tool.set(Tool::Select);
                }
            }
        })
    };

    let on_comment_resolve = {
        let project = project.clone();
        Callback::from(move |comment_id: String| {
            if let Some(mut p) = (*project).clone() {
                p.toggle_comment_resolved(&comment_id);
                project.set(Some(p));
            }
        })
    };

    let on_element_select = {
        let selected_element = selected_element.clone();
        Callback::from(move |element: Option<DesignElement>| {
            selected_element.set(element);
        })
    };

    let on_tool_change = {
        let tool = tool.clone();
        Callback::from(move |t: Tool| tool.set(t))
    };

    let on_draft_change = {
        let new_comment = new_comment.clone();
        Callback::from(move |draft: String| new_comment.set(draft))
    };

    let on_comment_select = {
        let selected_comment_id = selected_comment_id.clone();
        Callback::from(move |id: String| selected_comment_id.set(Some(id)))
    };

    let on_toggle_comments = {
        let show_comments = show_comments.clone();
        Callback::from(move |()| show_comments.set(!*show_comments))
    };

    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    // Dumps the working copy, including unsaved comments, to the console.
    let on_export = {
        let project = project.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(p) = project.as_ref() {
                match serde_json::to_string_pretty(p) {
                    Ok(json) => log::info!("exported project {}:\n{json}", p.id),
                    Err(err) => log::warn!("export failed: {err}"),
                }
            }
        })
    };

    let tab_button = |tab: SideTab, label: &str| {
        let active = *side_tab == tab;
        let side_tab = side_tab.clone();
        let onclick = Callback::from(move |_: MouseEvent| side_tab.set(tab));
        html! {
            <button
                {onclick}
                class={classes!(
                    "flex-1", "px-3", "py-1.5", "rounded", "text-sm", "transition-colors",
                    if active { "bg-white shadow font-medium" } else { "text-gray-500 hover:text-gray-900" }
                )}
            >
                {label.to_string()}
            </button>
        }
    };

    let canvas_comments = if *show_comments {
        current.comments.clone()
    } else {
        Vec::new()
    };

    let collaborator_stack = current
        .collaborators
        .iter()
        .take(3)
        .map(|user| {
            html! {
                <span
                    key={user.id.clone()}
                    title={user.name.clone()}
                    class="h-8 w-8 rounded-full bg-gray-200 border-2 border-white flex items-center justify-center text-xs"
                >
                    { initials(&user.name) }
                </span>
            }
        })
        .collect::<Html>();
    let overflow = current.collaborators.len().saturating_sub(3);

    html! {
        <div>
            // Project header
            <div class="border-b bg-white/80 backdrop-blur-lg">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-4">
                            <button
                                onclick={on_back_click}
                                class="flex items-center space-x-2 px-2 py-1 rounded hover:bg-gray-100 text-sm"
                            >
                                <span>{"\u{2190}"}</span>
                                <span>{"Back to Projects"}</span>
                            </button>
                            <div class="w-px h-6 bg-gray-200" />
                            <div>
                                <h1 class="text-xl font-bold">{ &current.name }</h1>
                                <p class="text-sm text-gray-500">
                                    { format!("Last modified {}", format_date(&current.last_modified)) }
                                </p>
                            </div>
                        </div>

                        <div class="flex items-center space-x-3">
                            <div class="flex -space-x-2">
                                {collaborator_stack}
                                if overflow > 0 {
                                    <span class="h-8 w-8 rounded-full bg-gray-100 border-2 border-white flex items-center justify-center text-xs text-gray-500">
                                        { format!("+{overflow}") }
                                    </span>
                                }
                            </div>
                            <button class="px-3 py-1 rounded border border-gray-200 text-sm hover:bg-gray-50">
                                {"Share"}
                            </button>
                            <button
                                onclick={on_export}
                                class="px-3 py-1 rounded border border-gray-200 text-sm hover:bg-gray-50"
                            >
                                {"Export"}
                            </button>
                            <button
                                title="Settings"
                                class="px-3 py-1 rounded border border-gray-200 text-sm hover:bg-gray-50"
                            >
                                {"\u{2699}"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="grid grid-cols-1 lg:grid-cols-4 gap-6 h-[calc(100vh-12rem)]">
                    // Canvas
                    <div class="lg:col-span-3 bg-white rounded-lg border border-gray-200 shadow-sm p-4">
                        <DesignCanvas
                            elements={current.elements.clone()}
                            comments={canvas_comments}
                            selected={(*selected_element).clone()}
                            tool={*tool}
                            on_element_select={on_element_select}
                            on_comment_add={on_comment_add}
                            on_tool_change={on_tool_change.clone()}
                        />
                    </div>

                    // Sidebar
                    <div class="space-y-6">
                        <ToolsPanel
                            tool={*tool}
                            draft={(*new_comment).clone()}
                            on_tool_change={on_tool_change}
                            on_draft_change={on_draft_change}
                        />

                        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                            <div class="p-3 border-b border-gray-200">
                                <div class="flex bg-gray-100 rounded-lg p-1">
                                    { tab_button(SideTab::Comments, "Comments") }
                                    { tab_button(SideTab::Versions, "Versions") }
                                    { tab_button(SideTab::Team, "Team") }
                                </div>
                            </div>
                            <div class="p-4">
                                {
                                    match *side_tab {
                                        SideTab::Comments => html! {
                                            <CommentsPanel
                                                comments={current.comments.clone()}
                                                selected_id={(*selected_comment_id).clone()}
                                                show_comments={*show_comments}
                                                on_toggle_visibility={on_toggle_comments}
                                                on_select={on_comment_select}
                                                on_resolve={on_comment_resolve}
                                            />
                                        },
                                        SideTab::Versions => html! {
                                            <VersionsPanel versions={current.versions.clone()} />
                                        },
                                        SideTab::Team => html! {
                                            <TeamPanel
                                                owner={current.owner.clone()}
                                                collaborators={current.collaborators.clone()}
                                            />
                                        },
                                    }
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
