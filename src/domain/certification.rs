//! Certification records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A certification as stored in the `certifications` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// Free-form date text.
    pub date: String,
    pub verify_link: String,
    pub image: String,
    pub description: String,
}

const VERIFY_PLACEHOLDER: &str = "https://www.coursera.org/verify/your-certificate-id-here";

impl Certification {
    /// The certifications inserted into an empty store on first run.
    pub fn defaults() -> Vec<Certification> {
        vec![
            Certification {
                id: "1".to_string(),
                title: "Google UX Design Professional Certificate".to_string(),
                issuer: "Google".to_string(),
                date: "July 2024".to_string(),
                verify_link: VERIFY_PLACEHOLDER.to_string(),
                image: "https://placehold.co/600x400/fff/333?text=Google+UX".to_string(),
                description: "Details about the Google UX certification...".to_string(),
            },
            Certification {
                id: "2".to_string(),
                title: "Meta Front-End Developer Professional Certificate".to_string(),
                issuer: "Meta".to_string(),
                date: "August 2024".to_string(),
                verify_link: VERIFY_PLACEHOLDER.to_string(),
                image: "https://placehold.co/600x400/fff/333?text=Meta+Front-End".to_string(),
                description: "Details about the Meta Front-End certification...".to_string(),
            },
        ]
    }
}
