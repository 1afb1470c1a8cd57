//! Static in-memory dataset standing in for a real backend. Everything is
//! rebuilt on each call; page state owns its own copy and reloads discard
//! all changes.

use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{
    CircleStyle, Comment, DesignElement, Dimensions, ElementKind, Point, PresenceStatus, Project,
    ProjectStatus, RectangleStyle, Role, TextStyle, User, Version,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

pub fn mock_users() -> Vec<Rc<User>> {
    vec![
        Rc::new(User {
            id: "1".to_string(),
            name: "Alex Chen".to_string(),
            email: "alex@designflow.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=64&h=64&fit=crop&crop=face".to_string(),
            status: PresenceStatus::Online,
            role: Role::Owner,
        }),
        Rc::new(User {
            id: "2".to_string(),
            name: "Sarah Kim".to_string(),
            email: "sarah@designflow.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=64&h=64&fit=crop&crop=face".to_string(),
            status: PresenceStatus::Online,
            role: Role::Editor,
        }),
        Rc::new(User {
            id: "3".to_string(),
            name: "Marcus Johnson".to_string(),
            email: "marcus@designflow.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=64&h=64&fit=crop&crop=face".to_string(),
            status: PresenceStatus::Away,
            role: Role::Editor,
        }),
        Rc::new(User {
            id: "4".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily@designflow.com".to_string(),
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=64&h=64&fit=crop&crop=face".to_string(),
            status: PresenceStatus::Offline,
            role: Role::Viewer,
        }),
    ]
}

fn mock_comments(users: &[Rc<User>]) -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            content: "Love the color scheme here! Maybe we could make the primary CTA a bit more prominent?".to_string(),
            author: users[1].clone(),
            timestamp: ts(2024, 1, 15, 10, 30),
            position: Point::new(420.0, 280.0),
            resolved: false,
            replies: vec![Comment {
                id: "1-1".to_string(),
                content: "Great suggestion! I'll increase the button size and add more contrast.".to_string(),
                author: users[0].clone(),
                timestamp: ts(2024, 1, 15, 10, 45),
                position: Point::new(420.0, 280.0),
                resolved: false,
                replies: Vec::new(),
            }],
        },
        Comment {
            id: "2".to_string(),
            content: "The spacing between these elements feels a bit tight. Could we add more breathing room?".to_string(),
            author: users[2].clone(),
            timestamp: ts(2024, 1, 15, 14, 20),
            position: Point::new(180.0, 350.0),
            resolved: true,
            replies: Vec::new(),
        },
        Comment {
            id: "3".to_string(),
            content: "Typography hierarchy looks perfect! The heading really draws attention.".to_string(),
            author: users[3].clone(),
            timestamp: ts(2024, 1, 15, 16, 10),
            position: Point::new(300.0, 120.0),
            resolved: false,
            replies: Vec::new(),
        },
    ]
}

const VERSION_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=300&h=200&fit=crop";

fn mock_versions(users: &[Rc<User>]) -> Vec<Version> {
    vec![
        Version {
            id: "1".to_string(),
            name: "Initial Design".to_string(),
            description: "First draft of the mobile app landing page".to_string(),
            author: users[0].clone(),
            timestamp: ts(2024, 1, 10, 9, 0),
            thumbnail: VERSION_THUMBNAIL.to_string(),
            changes: vec![
                "Created initial layout".to_string(),
                "Added hero section".to_string(),
                "Designed navigation".to_string(),
            ],
        },
        Version {
            id: "2".to_string(),
            name: "Color Improvements".to_string(),
            description: "Updated color palette based on brand guidelines".to_string(),
            author: users[1].clone(),
            timestamp: ts(2024, 1, 12, 11, 30),
            thumbnail: VERSION_THUMBNAIL.to_string(),
            changes: vec![
                "Updated primary colors".to_string(),
                "Improved contrast ratios".to_string(),
                "Added gradient backgrounds".to_string(),
            ],
        },
        Version {
            id: "3".to_string(),
            name: "Mobile Responsive".to_string(),
            description: "Made the design responsive for mobile devices".to_string(),
            author: users[2].clone(),
            timestamp: ts(2024, 1, 14, 15, 45),
            thumbnail: VERSION_THUMBNAIL.to_string(),
            changes: vec![
                "Added mobile breakpoints".to_string(),
                "Optimized touch targets".to_string(),
                "Improved mobile navigation".to_string(),
            ],
        },
        Version {
            id: "4".to_string(),
            name: "Current Version".to_string(),
            description: "Latest version with user feedback incorporated".to_string(),
            author: users[0].clone(),
            timestamp: ts(2024, 1, 15, 17, 0),
            thumbnail: VERSION_THUMBNAIL.to_string(),
            changes: vec![
                "Fixed spacing issues".to_string(),
                "Enhanced CTA buttons".to_string(),
                "Added micro-interactions".to_string(),
            ],
        },
    ]
}

fn mock_elements() -> Vec<DesignElement> {
    vec![
        DesignElement {
            id: "1".to_string(),
            kind: ElementKind::Rectangle(RectangleStyle {
                fill: "#8B5CF6".to_string(),
                border_radius: 12.0,
                label: Some("Welcome to DesignFlow".to_string()),
                font_size: 24.0,
                ..RectangleStyle::default()
            }),
            position: Point::new(50.0, 50.0),
            size: Dimensions::new(300.0, 60.0),
        },
        DesignElement {
            id: "2".to_string(),
            kind: ElementKind::Text(TextStyle {
                content: "Collaborate on designs in real-time with your team. Share feedback, track versions, and create amazing experiences together.".to_string(),
                ..TextStyle::default()
            }),
            position: Point::new(50.0, 130.0),
            size: Dimensions::new(400.0, 80.0),
        },
        DesignElement {
            id: "3".to_string(),
            kind: ElementKind::Rectangle(RectangleStyle {
                fill: "#10B981".to_string(),
                border_radius: 8.0,
                label: Some("Get Started".to_string()),
                ..RectangleStyle::default()
            }),
            position: Point::new(50.0, 230.0),
            size: Dimensions::new(150.0, 44.0),
        },
        DesignElement {
            id: "4".to_string(),
            kind: ElementKind::Circle(CircleStyle {
                stroke: Some("#E2E8F0".to_string()),
                ..CircleStyle::default()
            }),
            position: Point::new(450.0, 100.0),
            size: Dimensions::new(120.0, 120.0),
        },
    ]
}

pub fn mock_projects() -> Vec<Project> {
    let users = mock_users();

    vec![
        Project {
            id: "1".to_string(),
            name: "Mobile App Landing Page".to_string(),
            description: "A modern landing page design for our new mobile application with focus on conversion optimization.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 15, 17, 0),
            owner: users[0].clone(),
            collaborators: vec![users[1].clone(), users[2].clone(), users[3].clone()],
            comments: mock_comments(&users),
            versions: mock_versions(&users),
            elements: mock_elements(),
            status: ProjectStatus::Active,
        },
        Project {
            id: "2".to_string(),
            name: "E-commerce Dashboard".to_string(),
            description: "Admin dashboard for e-commerce platform with analytics, inventory management, and user insights.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 14, 10, 30),
            owner: users[1].clone(),
            collaborators: vec![users[0].clone(), users[2].clone()],
            comments: Vec::new(),
            versions: Vec::new(),
            elements: Vec::new(),
            status: ProjectStatus::Shared,
        },
        Project {
            id: "3".to_string(),
            name: "Brand Identity System".to_string(),
            description: "Complete brand identity including logo, color palette, typography, and design guidelines.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1558655146-d09347e92766?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 13, 16, 20),
            owner: users[2].clone(),
            collaborators: vec![users[0].clone(), users[1].clone(), users[3].clone()],
            comments: Vec::new(),
            versions: Vec::new(),
            elements: Vec::new(),
            status: ProjectStatus::Active,
        },
        Project {
            id: "4".to_string(),
            name: "Website Redesign".to_string(),
            description: "Complete redesign of company website with improved user experience and modern aesthetics.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 10, 8, 15),
            owner: users[3].clone(),
            collaborators: vec![users[0].clone()],
            comments: Vec::new(),
            versions: Vec::new(),
            elements: Vec::new(),
            status: ProjectStatus::Archived,
        },
        Project {
            id: "5".to_string(),
            name: "Social Media Templates".to_string(),
            description: "Collection of social media post templates for consistent brand presence across platforms.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1611262588024-d12430b98920?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 12, 14, 45),
            owner: users[0].clone(),
            collaborators: vec![users[1].clone(), users[3].clone()],
            comments: Vec::new(),
            versions: Vec::new(),
            elements: Vec::new(),
            status: ProjectStatus::Active,
        },
        Project {
            id: "6".to_string(),
            name: "User Onboarding Flow".to_string(),
            description: "Step-by-step onboarding process design to improve user activation and reduce drop-off rates.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1553028826-f4804151e2d8?w=400&h=300&fit=crop".to_string(),
            last_modified: ts(2024, 1, 11, 19, 30),
            owner: users[1].clone(),
            collaborators: vec![users[0].clone(), users[2].clone(), users[3].clone()],
            comments: Vec::new(),
            versions: Vec::new(),
            elements: Vec::new(),
            status: ProjectStatus::Shared,
        },
    ]
}

pub fn find_project(id: &str) -> Option<Project> {
    mock_projects().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_shape() {
        let projects = mock_projects();
        assert_eq!(mock_users().len(), 4);
        assert_eq!(projects.len(), 6);

        let first = &projects[0];
        assert_eq!(first.comments.len(), 3);
        assert_eq!(first.comments[0].replies.len(), 1);
        assert_eq!(first.versions.len(), 4);
        assert_eq!(first.elements.len(), 4);
    }

    #[test]
    fn every_author_and_member_is_a_known_user() {
        let user_ids: Vec<String> = mock_users().iter().map(|u| u.id.clone()).collect();
        let known = |user: &Rc<User>| user_ids.contains(&user.id);

        fn check_comment(comment: &Comment, known: &dyn Fn(&Rc<User>) -> bool) {
            assert!(known(&comment.author), "unknown author on {}", comment.id);
            for reply in &comment.replies {
                check_comment(reply, known);
            }
        }

        for project in mock_projects() {
            assert!(known(&project.owner));
            assert!(project.collaborators.iter().all(&known));
            for comment in &project.comments {
                check_comment(comment, &known);
            }
            assert!(project.versions.iter().all(|v| known(&v.author)));
        }
    }

    #[test]
    fn find_project_hits_and_misses() {
        assert!(find_project("1").is_some());
        assert_eq!(find_project("1").unwrap().name, "Mobile App Landing Page");
        assert!(find_project("does-not-exist").is_none());
    }

    #[test]
    fn project_ids_are_unique() {
        let projects = mock_projects();
        for (i, a) in projects.iter().enumerate() {
            for b in &projects[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
