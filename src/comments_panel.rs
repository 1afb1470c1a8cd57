use yew::prelude::*;
use web_sys::MouseEvent;

use crate::types::Comment;
use crate::utils::{format_date, initials};

#[derive(Properties, PartialEq)]
pub struct CommentsPanelProps {
    pub comments: Vec<Comment>,
    pub selected_id: Option<String>,
    pub show_comments: bool,
    pub on_toggle_visibility: Callback<()>,
    pub on_select: Callback<String>,
    pub on_resolve: Callback<String>,
}

#[function_component(CommentsPanel)]
pub fn comments_panel(props: &CommentsPanelProps) -> Html {
    let on_toggle = {
        let on_toggle_visibility = props.on_toggle_visibility.clone();
        Callback::from(move |_: MouseEvent| on_toggle_visibility.emit(()))
    };

    let entries = props
        .comments
        .iter()
        .map(|comment| {
            let is_selected = props.selected_id.as_deref() == Some(comment.id.as_str());

            let onclick = {
                let on_select = props.on_select.clone();
                let id = comment.id.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
            };

            // Resolving must not also select the comment.
            let on_resolve_click = {
                let on_resolve = props.on_resolve.clone();
                let id = comment.id.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    on_resolve.emit(id.clone());
                })
            };

            html! {
                <div
                    key={comment.id.clone()}
                    {onclick}
                    class={classes!(
                        "p-3", "border", "rounded-lg", "transition-colors", "cursor-pointer",
                        if comment.resolved { "bg-gray-50 border-gray-100" } else { "bg-white border-gray-200" },
                        is_selected.then_some("ring-2 ring-violet-500")
                    )}
                >
                    <div class="flex items-start justify-between mb-2">
                        <div class="flex items-center space-x-2">
                            <span class="h-6 w-6 rounded-full bg-gray-200 flex items-center justify-center text-xs">
                                { initials(&comment.author.name) }
                            </span>
                            <span class="text-sm font-medium">{ &comment.author.name }</span>
                            if comment.resolved {
                                <span class="text-xs px-2 py-0.5 rounded bg-gray-100 text-gray-600">
                                    {"Resolved"}
                                </span>
                            }
                        </div>
                        <button
                            onclick={on_resolve_click}
                            class="h-6 w-6 rounded hover:bg-gray-100 text-xs"
                            title={if comment.resolved { "Reopen" } else { "Resolve" }}
                        >
                            { if comment.resolved { "\u{2715}" } else { "\u{2713}" } }
                        </button>
                    </div>
                    <p class="text-sm text-gray-500 mb-2">{ &comment.content }</p>
                    <p class="text-xs text-gray-400">{ format_date(&comment.timestamp) }</p>
                    if !comment.replies.is_empty() {
                        <div class="mt-2 pl-3 border-l-2 border-gray-100 space-y-2">
                            {
                                comment.replies.iter().map(|reply| html! {
                                    <div key={reply.id.clone()}>
                                        <p class="text-xs font-medium">{ &reply.author.name }</p>
                                        <p class="text-sm text-gray-500">{ &reply.content }</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <h4 class="font-medium">{ format!("Comments ({})", props.comments.len()) }</h4>
                <button
                    onclick={on_toggle}
                    class={classes!(
                        "px-2", "py-1", "rounded", "text-sm",
                        if props.show_comments { "bg-violet-600 text-white" } else { "hover:bg-gray-100" }
                    )}
                >
                    { if props.show_comments { "Hide" } else { "Show" } }
                </button>
            </div>
            <div class="space-y-3 overflow-y-auto max-h-[400px]">
                {entries}
            </div>
        </div>
    }
}
