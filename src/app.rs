use yew::prelude::*;

use crate::navigation::Navigation;
use crate::pages::{ActivityPage, CommentsPage, TeamPage};
use crate::project_list::ProjectList;
use crate::project_page::ProjectPage;

/// In-memory navigation state. The demo keeps routing out of the URL bar;
/// switching pages is plain component state, like a tab switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Projects,
    Project(String),
    Activity,
    Comments,
    Team,
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Projects);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |r: Route| route.set(r))
    };

    let on_open = {
        let route = route.clone();
        Callback::from(move |id: String| route.set(Route::Project(id)))
    };

    let on_back = {
        let route = route.clone();
        Callback::from(move |()| route.set(Route::Projects))
    };

    let page = match &*route {
        Route::Projects => html! { <ProjectList on_open={on_open} /> },
        Route::Project(id) => html! { <ProjectPage id={id.clone()} on_back={on_back} /> },
        Route::Activity => html! { <ActivityPage /> },
        Route::Comments => html! { <CommentsPage /> },
        Route::Team => html! { <TeamPage /> },
    };

    html! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <Navigation route={(*route).clone()} on_navigate={on_navigate} />
            {page}
        </div>
    }
}
