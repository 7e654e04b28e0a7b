//! Project records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A portfolio project as stored in the `projects` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Caller-assigned identifier. Not unique.
    pub id: String,
    /// Free-form category, e.g. "major" or "mini".
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form category, e.g. "Web Development".
    pub category: String,
    pub title: String,
    pub summary: String,
    pub client: String,
    /// Free-form date text.
    pub project_date: String,
    pub github_link: String,
    /// Image URLs, in display order.
    pub images: Vec<String>,
    pub description: String,
}

const GITHUB_PLACEHOLDER: &str = "https://github.com/your-username/your-project";

impl Project {
    /// The projects inserted into an empty store on first run.
    pub fn defaults() -> Vec<Project> {
        vec![
            Project {
                id: "1".to_string(),
                kind: "major".to_string(),
                category: "Web Development".to_string(),
                title: "Real-Time Chat App".to_string(),
                summary: "A full-stack application built for real-time messaging.".to_string(),
                client: "Personal Project".to_string(),
                project_date: "October 2024".to_string(),
                github_link: GITHUB_PLACEHOLDER.to_string(),
                images: vec![
                    "https://placehold.co/600x400/f0f8ff/3b82f6?text=Chat+App+Mockup+1".to_string(),
                ],
                description: "Details about the chat app project...".to_string(),
            },
            Project {
                id: "2".to_string(),
                kind: "major".to_string(),
                category: "UX/UI Design".to_string(),
                title: "E-commerce App Redesign".to_string(),
                summary: "A UX/UI case study on improving a fashion e-commerce platform."
                    .to_string(),
                client: "Fictional Client".to_string(),
                project_date: "September 2024".to_string(),
                github_link: GITHUB_PLACEHOLDER.to_string(),
                images: vec![
                    "https://placehold.co/600x400/f0f8ff/3b82f6?text=E-commerce+Redesign"
                        .to_string(),
                ],
                description: "Details about the e-commerce redesign...".to_string(),
            },
            Project {
                id: "3".to_string(),
                kind: "mini".to_string(),
                category: "Web Development".to_string(),
                title: "Personal Finance Tracker".to_string(),
                summary: "A single-page application to visualize and manage personal spending."
                    .to_string(),
                client: "Personal Project".to_string(),
                project_date: "August 2024".to_string(),
                github_link: GITHUB_PLACEHOLDER.to_string(),
                images: vec![
                    "https://placehold.co/600x400/f0f8ff/3b82f6?text=Finance+Dashboard".to_string(),
                ],
                description: "Details about the finance tracker...".to_string(),
            },
            Project {
                id: "4".to_string(),
                kind: "mini".to_string(),
                category: "UX/UI Design".to_string(),
                title: "Interactive Weather App".to_string(),
                summary: "A simple weather application that fetches real-time weather data."
                    .to_string(),
                client: "Personal Project".to_string(),
                project_date: "July 2024".to_string(),
                github_link: GITHUB_PLACEHOLDER.to_string(),
                images: vec!["https://placehold.co/600x400/f0f8ff/3b82f6?text=Weather+App".to_string()],
                description: "Details about the weather app...".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let projects = Project::defaults();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].title, "Real-Time Chat App");
        assert_eq!(projects[0].kind, "major");
        assert_eq!(projects[3].kind, "mini");
    }

    #[test]
    fn test_json_field_names() {
        let project = &Project::defaults()[0];
        let value = serde_json::to_value(project).unwrap();

        assert_eq!(value["type"], "major");
        assert_eq!(value["projectDate"], "October 2024");
        assert_eq!(value["githubLink"], GITHUB_PLACEHOLDER);
        assert!(value["images"].is_array());
        assert!(value.get("kind").is_none());
        assert!(value.get("project_date").is_none());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = serde_json::json!({
            "id": "9",
            "type": "mini",
            "title": "Incomplete"
        });
        assert!(serde_json::from_value::<Project>(json).is_err());
    }
}
