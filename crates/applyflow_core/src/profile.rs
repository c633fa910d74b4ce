use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured candidate profile backing the editor buffer.
///
/// The buffer holds the pretty-printed JSON form; uploads replace the buffer
/// wholesale and are not validated against this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub questions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ProfileDocument {
    /// Placeholder-seeded document written into a fresh editor buffer.
    pub fn template() -> Self {
        let questions = [
            ("years_of_experience", "3"),
            ("willing_to_relocate", "Yes"),
            ("willing_to_travel", "Yes"),
            ("preferred_work_setting", "Hybrid"),
            ("salary_expectation", "$80,000 - $100,000"),
            ("preferred_start_date", "As soon as possible"),
            ("visa_sponsorship_required", "No"),
            ("cleared_security_clearance", "No"),
        ]
        .into_iter()
        .map(|(key, answer)| (key.to_string(), answer.to_string()))
        .collect();

        Self {
            personal_info: PersonalInfo {
                name: "Your Name".to_string(),
                email: String::new(),
                phone: String::new(),
                address: "Your Address".to_string(),
                linkedin: "https://www.linkedin.com/in/your-profile".to_string(),
                website: String::new(),
            },
            education: vec![EducationEntry {
                school: "Your University".to_string(),
                degree: "Your Degree".to_string(),
                field_of_study: "Your Field".to_string(),
                start_date: "MM/YYYY".to_string(),
                end_date: "MM/YYYY".to_string(),
                gpa: "4.0".to_string(),
            }],
            work_experience: vec![WorkExperienceEntry {
                company: "Your Last Company".to_string(),
                title: "Your Title".to_string(),
                location: "City, State".to_string(),
                start_date: "MM/YYYY".to_string(),
                end_date: "MM/YYYY".to_string(),
                description: "Brief description of your role".to_string(),
            }],
            skills: vec![
                "Skill 1".to_string(),
                "Skill 2".to_string(),
                "Skill 3".to_string(),
            ],
            certifications: vec![
                "Certification 1".to_string(),
                "Certification 2".to_string(),
            ],
            languages: vec!["English".to_string()],
            questions,
        }
    }

    /// Pretty-printed template, used to seed the editor buffer.
    pub fn template_json() -> String {
        let value = serde_json::to_value(Self::template()).expect("serialize template");
        pretty_json(&value)
    }
}

/// Pretty-print a JSON value the way the editor buffer stores it.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("serialize json value")
}

/// Wrap non-JSON file content in the fallback resume shape.
///
/// Structured fields stay empty; the raw text is carried verbatim under
/// `resumeText`.
pub fn fallback_for_text(raw: &str) -> Value {
    serde_json::json!({
        "resumeText": raw,
        "name": "",
        "contact": {
            "email": "",
            "phone": "",
        },
        "experience": [],
        "education": [],
        "skills": [],
    })
}
