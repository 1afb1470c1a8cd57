use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::fixtures;
use crate::project_card::ProjectCard;
use crate::types::{Project, ProjectStatus};
use crate::utils::initials;

/// Case-insensitive substring match over project name or description.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let query = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query) || p.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

pub fn filter_by_status(projects: &[Project], status: Option<ProjectStatus>) -> Vec<Project> {
    match status {
        None => projects.to_vec(),
        Some(status) => projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTab {
    All,
    Active,
    Shared,
    Archived,
}

impl StatusTab {
    const ALL: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Active,
        StatusTab::Shared,
        StatusTab::Archived,
    ];

    pub fn status(&self) -> Option<ProjectStatus> {
        match self {
            StatusTab::All => None,
            StatusTab::Active => Some(ProjectStatus::Active),
            StatusTab::Shared => Some(ProjectStatus::Shared),
            StatusTab::Archived => Some(ProjectStatus::Archived),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All Projects",
            StatusTab::Active => "Active",
            StatusTab::Shared => "Shared",
            StatusTab::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub on_open: Callback<String>,
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    let projects = use_state(fixtures::mock_projects);
    let query = use_state(String::new);
    let view_mode = use_state(|| ViewMode::Grid);
    let active_tab = use_state(|| StatusTab::All);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let active_count = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let unresolved_count: usize = projects.iter().map(Project::unresolved_comment_count).sum();

    let visible = filter_by_status(
        &filter_projects(&projects, &query),
        active_tab.status(),
    );

    let status_tabs = StatusTab::ALL
        .iter()
        .map(|&tab| {
            let is_active = tab == *active_tab;
            let active_tab = active_tab.clone();
            let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
            html! {
                <button
                    key={tab.label()}
                    {onclick}
                    class={classes!(
                        "flex-1", "px-3", "py-1.5", "rounded", "text-sm", "transition-colors",
                        if is_active { "bg-white shadow font-medium" } else { "text-gray-500 hover:text-gray-900" }
                    )}
                >
                    { tab.label() }
                </button>
            }
        })
        .collect::<Html>();

    let view_button = |mode: ViewMode, icon: &'static str| {
        let is_active = *view_mode == mode;
        let view_mode = view_mode.clone();
        let onclick = Callback::from(move |_: MouseEvent| view_mode.set(mode));
        html! {
            <button
                {onclick}
                class={classes!(
                    "px-3", "py-1.5", "text-sm",
                    if is_active { "bg-violet-600 text-white" } else { "hover:bg-gray-50" }
                )}
            >
                {icon}
            </button>
        }
    };

    let grid_class = match *view_mode {
        ViewMode::Grid => "grid gap-6 grid-cols-1 md:grid-cols-2",
        ViewMode::List => "grid gap-6 grid-cols-1",
    };

    let cards = visible
        .iter()
        .map(|project| {
            html! {
                <ProjectCard
                    key={project.id.clone()}
                    project={project.clone()}
                    on_open={props.on_open.clone()}
                />
            }
        })
        .collect::<Html>();

    let team_rows = fixtures::mock_users()
        .iter()
        .map(|user| {
            html! {
                <div key={user.id.clone()} class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <div class="relative">
                            <span class="h-8 w-8 rounded-full bg-gray-200 flex items-center justify-center text-xs">
                                { initials(&user.name) }
                            </span>
                            <span class={classes!(
                                "absolute", "-bottom-0.5", "-right-0.5", "w-3", "h-3",
                                "rounded-full", "border-2", "border-white",
                                user.status.dot_class()
                            )} />
                        </div>
                        <div>
                            <p class="font-medium text-sm">{ &user.name }</p>
                            <p class="text-xs text-gray-500">{ user.role.label() }</p>
                        </div>
                    </div>
                    <span class="text-xs px-2 py-0.5 rounded border border-gray-200 text-gray-600">
                        { user.status.label() }
                    </span>
                </div>
            }
        })
        .collect::<Html>();

    // Hard-coded feed, same as the rest of the fixture data.
    let recent_activity = [
        ("Sarah Kim", "commented on", "Mobile App Landing Page", "2 hours ago"),
        ("Alex Chen", "created new version of", "E-commerce Dashboard", "4 hours ago"),
        ("Marcus Johnson", "shared", "Brand Identity System", "1 day ago"),
    ];
    let activity_rows = recent_activity
        .iter()
        .map(|(user, action, target, time)| {
            html! {
                <div key={*target} class="flex items-start space-x-3">
                    <span class="h-8 w-8 rounded-full bg-gray-200 flex items-center justify-center text-xs">
                        { initials(user) }
                    </span>
                    <div class="flex-1 min-w-0">
                        <p class="text-sm">
                            <span class="font-medium">{*user}</span>
                            {" "}
                            <span class="text-gray-500">{*action}</span>
                            {" "}
                            <span class="font-medium">{*target}</span>
                        </p>
                        <p class="text-xs text-gray-500">{*time}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            // Header
            <div class="flex flex-col lg:flex-row justify-between items-start lg:items-center mb-8">
                <div>
                    <h1 class="text-3xl font-bold mb-2">{"Welcome back, Alex! \u{1f44b}"}</h1>
                    <p class="text-gray-500">
                        { format!(
                            "You have {active_count} active projects and {unresolved_count} unresolved comments."
                        ) }
                    </p>
                </div>
                <button class="mt-4 lg:mt-0 px-4 py-2 rounded-lg bg-violet-600 text-white text-sm font-medium hover:bg-violet-700">
                    {"+ Create New Project"}
                </button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                // Main column
                <div class="lg:col-span-2">
                    <div class="flex flex-col sm:flex-row gap-4 mb-6">
                        <input
                            type="text"
                            placeholder="Search projects..."
                            value={(*query).clone()}
                            oninput={on_search}
                            class="flex-1 px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-violet-500"
                        />
                        <div class="flex border border-gray-200 rounded-lg overflow-hidden">
                            { view_button(ViewMode::Grid, "\u{25a6}") }
                            { view_button(ViewMode::List, "\u{2630}") }
                        </div>
                    </div>

                    <div class="flex bg-gray-100 rounded-lg p-1 mb-6">
                        {status_tabs}
                    </div>

                    <div class={grid_class}>
                        {cards}
                    </div>
                    if visible.is_empty() {
                        <p class="text-sm text-gray-500 text-center py-8">
                            {"No projects match your search."}
                        </p>
                    }
                </div>

                // Sidebar
                <div class="space-y-6">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-4">
                            <p class="text-2xl font-bold">{ projects.len() }</p>
                            <p class="text-xs text-gray-500">{"Projects"}</p>
                        </div>
                        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-4">
                            <p class="text-2xl font-bold">{ fixtures::mock_users().len() }</p>
                            <p class="text-xs text-gray-500">{"Team"}</p>
                        </div>
                    </div>

                    <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                        <div class="p-4 border-b border-gray-200">
                            <h2 class="text-lg font-semibold">{"Team Members"}</h2>
                        </div>
                        <div class="p-4 space-y-3">
                            {team_rows}
                        </div>
                    </div>

                    <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                        <div class="p-4 border-b border-gray-200">
                            <h2 class="text-lg font-semibold">{"Recent Activity"}</h2>
                        </div>
                        <div class="p-4 space-y-4">
                            {activity_rows}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let projects = fixtures::mock_projects();

        let by_name = filter_projects(&projects, "landing");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Mobile App Landing Page");

        let by_description = filter_projects(&projects, "ONBOARDING");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "User Onboarding Flow");
    }

    #[test]
    fn search_with_no_match_returns_empty() {
        let projects = fixtures::mock_projects();
        assert!(filter_projects(&projects, "zzz-not-a-project").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let projects = fixtures::mock_projects();
        assert_eq!(filter_projects(&projects, "").len(), projects.len());
    }

    #[test]
    fn status_filter_restricts_to_exact_status() {
        let projects = fixtures::mock_projects();

        let archived = filter_by_status(&projects, Some(ProjectStatus::Archived));
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].name, "Website Redesign");

        let all = filter_by_status(&projects, None);
        assert_eq!(all.len(), projects.len());
    }

    #[test]
    fn search_and_status_compose() {
        let projects = fixtures::mock_projects();
        let matched = filter_by_status(
            &filter_projects(&projects, "design"),
            Some(ProjectStatus::Shared),
        );
        assert!(matched.iter().all(|p| p.status == ProjectStatus::Shared));
        assert!(matched
            .iter()
            .all(|p| p.name.to_lowercase().contains("design")
                || p.description.to_lowercase().contains("design")));
    }

    #[test]
    fn status_tabs_map_to_statuses() {
        assert_eq!(StatusTab::All.status(), None);
        assert_eq!(StatusTab::Active.status(), Some(ProjectStatus::Active));
        assert_eq!(StatusTab::Shared.status(), Some(ProjectStatus::Shared));
        assert_eq!(StatusTab::Archived.status(), Some(ProjectStatus::Archived));
    }
}
