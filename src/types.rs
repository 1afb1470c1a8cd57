use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    Online,
    Away,
    Offline,
}

impl PresenceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Away => "away",
            PresenceStatus::Offline => "offline",
        }
    }

    /// CSS class for the presence dot next to an avatar.
    pub fn dot_class(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "bg-green-500",
            PresenceStatus::Away => "bg-yellow-500",
            PresenceStatus::Offline => "bg-gray-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Editor,
    Viewer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub status: PresenceStatus,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: Rc<User>,
    pub timestamp: DateTime<Utc>,
    /// Design-space coordinates, independent of zoom/pan.
    pub position: Point,
    pub resolved: bool,
    pub replies: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: Rc<User>,
    pub timestamp: DateTime<Utc>,
    pub thumbnail: String,
    pub changes: Vec<String>,
}

pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleStyle {
    pub fill: String,
    pub border_radius: f64,
    pub label: Option<String>,
    pub font_size: f64,
    pub font_family: String,
    pub opacity: f64,
}

impl Default for RectangleStyle {
    fn default() -> Self {
        Self {
            fill: "#8B5CF6".to_string(),
            border_radius: 0.0,
            label: None,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub fill: String,
    /// Rendered as a 2px outline when present.
    pub stroke: Option<String>,
    pub opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            fill: "#F1F5F9".to_string(),
            stroke: None,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub content: String,
    pub color: String,
    pub font_size: f64,
    pub font_family: String,
    pub opacity: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            content: String::new(),
            color: "#64748B".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            opacity: 1.0,
        }
    }
}

/// One variant per element type, carrying only the styling that type uses.
/// Rendering dispatches with an exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle(RectangleStyle),
    Circle(CircleStyle),
    Text(TextStyle),
    /// Placeholder block; no image decoding happens in the demo.
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: String,
    pub kind: ElementKind,
    pub position: Point,
    pub size: Dimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Archived,
    Shared,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Shared => "shared",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "bg-emerald-100 text-emerald-800",
            ProjectStatus::Shared => "bg-violet-100 text-violet-800",
            ProjectStatus::Archived => "bg-gray-100 text-gray-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub last_modified: DateTime<Utc>,
    pub owner: Rc<User>,
    pub collaborators: Vec<Rc<User>>,
    pub comments: Vec<Comment>,
    pub versions: Vec<Version>,
    pub elements: Vec<DesignElement>,
    pub status: ProjectStatus,
}

impl Project {
    /// Append a comment at `position`, authored by the project owner (the
    /// demo has no current-user concept). Empty or whitespace-only drafts
    /// are a no-op; returns whether a comment was added.
    pub fn add_comment(&mut self, content: &str, position: Point) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            author: self.owner.clone(),
            timestamp: Utc::now(),
            position,
            resolved: false,
            replies: Vec::new(),
        });
        true
    }

    /// Flip the resolved flag on the matching top-level comment. Replies are
    /// left untouched.
    pub fn toggle_comment_resolved(&mut self, comment_id: &str) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.resolved = !comment.resolved;
        }
    }

    pub fn unresolved_comment_count(&self) -> usize {
        self.comments.iter().filter(|c| !c.resolved).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Select,
    Move,
    Rectangle,
    Circle,
    Text,
    Image,
    Comment,
}

impl Tool {
    /// Buttons shown in the canvas toolbar.
    pub const CANVAS_TOOLBAR: [Tool; 6] = [
        Tool::Select,
        Tool::Move,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Text,
        Tool::Image,
    ];

    /// Buttons shown in the sidebar tools panel.
    pub const PANEL_TOOLS: [Tool; 6] = [
        Tool::Select,
        Tool::Comment,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Text,
        Tool::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Move => "Move",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Text => "Text",
            Tool::Image => "Image",
            Tool::Comment => "Comment",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Select => "\u{2196}",
            Tool::Move => "\u{271c}",
            Tool::Rectangle => "\u{25a2}",
            Tool::Circle => "\u{25cb}",
            Tool::Text => "T",
            Tool::Image => "\u{1f5bc}",
            Tool::Comment => "\u{1f4ac}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideTab {
    Comments,
    Versions,
    Team,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> Rc<User> {
        Rc::new(User {
            id: "u1".to_string(),
            name: "Alex Chen".to_string(),
            email: "alex@designflow.com".to_string(),
            avatar: String::new(),
            status: PresenceStatus::Online,
            role: Role::Owner,
        })
    }

    fn test_project() -> Project {
        let owner = test_user();
        Project {
            id: "p1".to_string(),
            name: "Test Project".to_string(),
            description: "A project for unit tests".to_string(),
            thumbnail: String::new(),
            last_modified: Utc::now(),
            owner: owner.clone(),
            collaborators: vec![],
            comments: vec![Comment {
                id: "c1".to_string(),
                content: "First pass looks good".to_string(),
                author: owner,
                timestamp: Utc::now(),
                position: Point::new(40.0, 60.0),
                resolved: false,
                replies: Vec::new(),
            }],
            versions: vec![],
            elements: vec![],
            status: ProjectStatus::Active,
        }
    }

    #[test]
    fn add_comment_with_blank_draft_is_a_noop() {
        let mut project = test_project();
        assert!(!project.add_comment("", Point::zero()));
        assert!(!project.add_comment("   \n\t", Point::zero()));
        assert_eq!(project.comments.len(), 1);
    }

    #[test]
    fn add_comment_appends_exactly_one_authored_by_owner() {
        let mut project = test_project();
        assert!(project.add_comment("Tighten the spacing here", Point::new(10.0, 20.0)));
        assert_eq!(project.comments.len(), 2);

        let added = project.comments.last().unwrap();
        assert_eq!(added.content, "Tighten the spacing here");
        assert_eq!(added.position, Point::new(10.0, 20.0));
        assert!(!added.resolved);
        assert!(added.replies.is_empty());
        assert!(Rc::ptr_eq(&added.author, &project.owner));
    }

    #[test]
    fn added_comments_get_unique_ids() {
        let mut project = test_project();
        project.add_comment("one", Point::zero());
        project.add_comment("two", Point::zero());
        let n = project.comments.len();
        assert_ne!(project.comments[n - 1].id, project.comments[n - 2].id);
    }

    #[test]
    fn resolve_toggle_is_idempotent_under_double_toggle() {
        let mut project = test_project();
        let before = project.comments[0].clone();

        project.toggle_comment_resolved("c1");
        assert!(project.comments[0].resolved);
        project.toggle_comment_resolved("c1");
        assert_eq!(project.comments[0], before);
    }

    #[test]
    fn resolve_toggle_preserves_other_fields() {
        let mut project = test_project();
        let before = project.comments[0].clone();
        project.toggle_comment_resolved("c1");

        let after = &project.comments[0];
        assert_eq!(after.content, before.content);
        assert_eq!(after.author, before.author);
        assert_eq!(after.position, before.position);
        assert_eq!(after.replies, before.replies);
    }

    #[test]
    fn resolve_toggle_with_unknown_id_changes_nothing() {
        let mut project = test_project();
        let before = project.clone();
        project.toggle_comment_resolved("nope");
        assert_eq!(project, before);
    }

    #[test]
    fn unresolved_count_tracks_toggles() {
        let mut project = test_project();
        assert_eq!(project.unresolved_comment_count(), 1);
        project.toggle_comment_resolved("c1");
        assert_eq!(project.unresolved_comment_count(), 0);
    }

    #[test]
    fn element_style_defaults_match_rendering_defaults() {
        let rect = RectangleStyle::default();
        assert_eq!(rect.fill, "#8B5CF6");
        assert_eq!(rect.border_radius, 0.0);
        assert_eq!(rect.opacity, 1.0);

        let circle = CircleStyle::default();
        assert_eq!(circle.fill, "#F1F5F9");
        assert!(circle.stroke.is_none());

        let text = TextStyle::default();
        assert_eq!(text.color, "#64748B");
        assert_eq!(text.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(text.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn project_roundtrips_through_json() {
        let project = test_project();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
