use std::rc::Rc;

use yew::prelude::*;

use crate::types::User;
use crate::utils::initials;

#[derive(Properties, PartialEq)]
pub struct TeamPanelProps {
    pub owner: Rc<User>,
    pub collaborators: Vec<Rc<User>>,
}

fn member_row(user: &Rc<User>, badge: Html, show_presence: bool) -> Html {
    html! {
        <div key={user.id.clone()} class="flex items-center justify-between p-3 border border-gray-200 rounded-lg">
            <div class="flex items-center space-x-3">
                <div class="relative">
                    <span class="h-8 w-8 rounded-full bg-gray-200 flex items-center justify-center text-xs">
                        { initials(&user.name) }
                    </span>
                    if show_presence {
                        <span class={classes!(
                            "absolute", "-bottom-0.5", "-right-0.5", "w-3", "h-3",
                            "rounded-full", "border-2", "border-white",
                            user.status.dot_class()
                        )} />
                    }
                </div>
                <div>
                    <p class="font-medium text-sm">{ &user.name }</p>
                    <p class="text-xs text-gray-500">{ &user.email }</p>
                </div>
            </div>
            {badge}
        </div>
    }
}

#[function_component(TeamPanel)]
pub fn team_panel(props: &TeamPanelProps) -> Html {
    let owner_badge = html! {
        <span class="text-xs px-2 py-0.5 rounded bg-violet-600 text-white">{"Owner"}</span>
    };

    let collaborator_rows = props
        .collaborators
        .iter()
        .map(|user| {
            let badge = html! {
                <span class="text-xs px-2 py-0.5 rounded border border-gray-200 text-gray-600">
                    { user.role.label() }
                </span>
            };
            member_row(user, badge, true)
        })
        .collect::<Html>();

    html! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <h4 class="font-medium">
                    { format!("Team Members ({})", props.collaborators.len() + 1) }
                </h4>
                <button class="px-2 py-1 rounded border border-gray-200 text-sm hover:bg-gray-50">
                    {"+ Invite"}
                </button>
            </div>
            <div class="space-y-3">
                { member_row(&props.owner, owner_badge, false) }
                {collaborator_rows}
            </div>
        </div>
    }
}
