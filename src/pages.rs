use yew::prelude::*;

// Placeholder pages for the nav items that are out of scope for the demo.

fn placeholder(title: &str, blurb: &str) -> Html {
    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center">
            <h1 class="text-2xl font-bold mb-2">{title.to_string()}</h1>
            <p class="text-gray-500">{blurb.to_string()}</p>
        </div>
    }
}

#[function_component(ActivityPage)]
pub fn activity_page() -> Html {
    placeholder("Activity", "A full activity feed is coming soon.")
}

#[function_component(CommentsPage)]
pub fn comments_page() -> Html {
    placeholder(
        "Comments",
        "Browse comments across all projects here soon. Open a project to comment on its canvas.",
    )
}

#[function_component(TeamPage)]
pub fn team_page() -> Html {
    placeholder("Team", "Team management is coming soon.")
}
