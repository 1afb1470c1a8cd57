use yew::prelude::*;
use web_sys::MouseEvent;

use crate::app::Route;
use crate::utils::initials;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

const NAV_ITEMS: [(&str, Route); 4] = [
    ("Projects", Route::Projects),
    ("Activity", Route::Activity),
    ("Comments", Route::Comments),
    ("Team", Route::Team),
];

/// Top bar shared by every page. A project detail view highlights the
/// Projects item since it is reached through the project list.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let is_active = |target: &Route| match (&props.route, target) {
        (Route::Project(_), Route::Projects) => true,
        (current, target) => current == target,
    };

    let items = NAV_ITEMS
        .iter()
        .map(|(label, target)| {
            let on_navigate = props.on_navigate.clone();
            let target = target.clone();
            let active = is_active(&target);
            let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()));
            html! {
                <button
                    key={*label}
                    {onclick}
                    class={classes!(
                        "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "transition-colors",
                        if active {
                            "bg-violet-100 text-violet-700"
                        } else {
                            "text-gray-500 hover:text-gray-900 hover:bg-gray-100"
                        }
                    )}
                >
                    {*label}
                </button>
            }
        })
        .collect::<Html>();

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Projects))
    };

    html! {
        <nav class="sticky top-0 z-50 border-b bg-white/80 backdrop-blur-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <button onclick={go_home} class="flex items-center space-x-2">
                            <span class="h-8 w-8 rounded-lg bg-violet-600 text-white flex items-center justify-center font-bold">
                                {"D"}
                            </span>
                            <span class="text-lg font-bold">{"DesignFlow"}</span>
                        </button>
                        <div class="hidden md:flex items-center space-x-1">
                            {items}
                        </div>
                    </div>

                    <div class="flex items-center space-x-3">
                        <button class="px-3 py-1 rounded border border-gray-200 text-sm hover:bg-gray-50">
                            {"Feedback"}
                        </button>
                        <span
                            title="Alex Chen"
                            class="h-8 w-8 rounded-full bg-gray-200 flex items-center justify-center text-xs"
                        >
                            { initials("Alex Chen") }
                        </span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
