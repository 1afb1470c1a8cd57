use yew::prelude::*;
use web_sys::{HtmlTextAreaElement, MouseEvent};

use crate::types::Tool;

#[derive(Properties, PartialEq)]
pub struct ToolsPanelProps {
    pub tool: Tool,
    pub draft: String,
    pub on_tool_change: Callback<Tool>,
    pub on_draft_change: Callback<String>,
}

#[function_component(ToolsPanel)]
pub fn tools_panel(props: &ToolsPanelProps) -> Html {
    let on_draft_input = {
        let on_draft_change = props.on_draft_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_draft_change.emit(textarea.value());
            }
        })
    };

    let on_cancel = {
        let on_tool_change = props.on_tool_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_tool_change.emit(Tool::Select);
        })
    };

    let tool_buttons = Tool::PANEL_TOOLS
        .iter()
        .map(|&t| {
            let on_tool_change = props.on_tool_change.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_tool_change.emit(t));
            html! {
                <button
                    key={t.label()}
                    {onclick}
                    class={classes!(
                        "flex", "items-center", "gap-2", "px-3", "py-2", "rounded-lg",
                        "text-sm", "border", "transition-colors", "justify-start",
                        if props.tool == t {
                            "bg-violet-600 text-white border-violet-600"
                        } else {
                            "bg-white border-gray-200 hover:bg-gray-50"
                        }
                    )}
                >
                    <span>{t.icon()}</span>
                    {t.label()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="p-4 border-b border-gray-200">
                <h2 class="text-lg font-semibold">{"Tools"}</h2>
            </div>
            <div class="p-4 space-y-3">
                <div class="grid grid-cols-2 gap-2">
                    {tool_buttons}
                </div>

                if props.tool == Tool::Comment {
                    <div class="mt-4 p-3 border border-gray-200 rounded-lg bg-violet-50">
                        <p class="text-sm text-gray-500 mb-2">
                            {"Click on the canvas to add a comment"}
                        </p>
                        <textarea
                            value={props.draft.clone()}
                            oninput={on_draft_input}
                            placeholder="Type your comment..."
                            rows="3"
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg text-sm resize-none focus:outline-none focus:ring-2 focus:ring-violet-500 mb-2"
                        />
                        <div class="flex justify-between">
                            <button
                                onclick={on_cancel}
                                class="px-3 py-1 rounded text-sm hover:bg-gray-100"
                            >
                                {"Cancel"}
                            </button>
                            <button
                                disabled={props.draft.trim().is_empty()}
                                class="px-3 py-1 rounded text-sm bg-violet-600 text-white disabled:opacity-50"
                            >
                                {"Ready to Place"}
                            </button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
