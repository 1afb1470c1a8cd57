use yew::prelude::*;

use crate::types::Version;
use crate::utils::{format_date, initials};

#[derive(Properties, PartialEq)]
pub struct VersionsPanelProps {
    pub versions: Vec<Version>,
}

/// Read-only version history list. The newest entry sits last in the
/// sequence and is badged as current; there is no version-creation flow in
/// the demo.
#[function_component(VersionsPanel)]
pub fn versions_panel(props: &VersionsPanelProps) -> Html {
    let count = props.versions.len();

    let entries = props
        .versions
        .iter()
        .enumerate()
        .rev()
        .map(|(idx, version)| {
            let is_current = idx + 1 == count;
            html! {
                <div key={version.id.clone()} class="p-3 border border-gray-200 rounded-lg">
                    <div class="flex items-center justify-between mb-2">
                        <span class="font-medium">{ &version.name }</span>
                        if is_current {
                            <span class="text-xs px-2 py-0.5 rounded bg-violet-600 text-white">
                                {"Current"}
                            </span>
                        }
                    </div>
                    <p class="text-sm text-gray-500 mb-2">{ &version.description }</p>
                    <ul class="text-xs text-gray-400 list-disc list-inside mb-2">
                        {
                            version.changes.iter().map(|change| html! {
                                <li>{ change }</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-2">
                            <span class="h-5 w-5 rounded-full bg-gray-200 flex items-center justify-center text-[10px]">
                                { initials(&version.author.name) }
                            </span>
                            <span class="text-xs text-gray-500">{ &version.author.name }</span>
                        </div>
                        <span class="text-xs text-gray-500">{ format_date(&version.timestamp) }</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-3">
            <h4 class="font-medium">{ format!("Version History ({count})") }</h4>
            <div class="space-y-3 overflow-y-auto max-h-[400px]">
                {entries}
                if props.versions.is_empty() {
                    <p class="text-sm text-gray-500 text-center py-4">
                        {"No versions yet."}
                    </p>
                }
            </div>
        </div>
    }
}
