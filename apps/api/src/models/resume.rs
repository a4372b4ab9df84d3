use serde::{Deserialize, Serialize};

/// Resume payload submitted by the browser. Owned by the client session;
/// passed by value into each analysis endpoint and never persisted.
///
/// Every field tolerates absence; validation of what an endpoint actually
/// needs happens in that endpoint's handler, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub field: String,
    pub year: String,
}

impl ResumeData {
    /// True when the resume carries no usable content at all.
    pub fn is_empty(&self) -> bool {
        self.experience.is_empty() && self.education.is_empty() && self.skills.is_empty()
    }

    /// Renders the resume into the readable plain-text form embedded in
    /// analysis prompts. Deterministic: same input, same text.
    pub fn to_prompt_text(&self) -> String {
        let mut out = String::new();

        if !self.personal_info.name.is_empty() {
            out.push_str(&format!("Name: {}\n", self.personal_info.name));
        }
        if !self.personal_info.title.is_empty() {
            out.push_str(&format!("Title: {}\n", self.personal_info.title));
        }
        if !self.personal_info.location.is_empty() {
            out.push_str(&format!("Location: {}\n", self.personal_info.location));
        }

        if !self.experience.is_empty() {
            out.push_str("\nEXPERIENCE:\n");
            for entry in &self.experience {
                out.push_str(&format!(
                    "- {} at {} ({} - {}): {}\n",
                    entry.position, entry.company, entry.start_date, entry.end_date,
                    entry.description
                ));
            }
        }

        if !self.education.is_empty() {
            out.push_str("\nEDUCATION:\n");
            for entry in &self.education {
                out.push_str(&format!(
                    "- {} in {} from {} ({})\n",
                    entry.degree, entry.field, entry.school, entry.year
                ));
            }
        }

        if !self.skills.is_empty() {
            out.push_str(&format!("\nSKILLS: {}\n", self.skills.join(", ")));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "".to_string(),
                location: "Bengaluru".to_string(),
                title: "Backend Engineer".to_string(),
            },
            experience: vec![ExperienceEntry {
                position: "Software Engineer".to_string(),
                company: "Acme Corp".to_string(),
                description: "Built payment APIs".to_string(),
                start_date: "2021-03".to_string(),
                end_date: "Present".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "B.Tech".to_string(),
                school: "IIT Madras".to_string(),
                field: "Computer Science".to_string(),
                year: "2021".to_string(),
            }],
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        }
    }

    #[test]
    fn test_resume_data_deserializes_camel_case() {
        let json = r#"{
            "personalInfo": {"name": "Asha Rao", "email": "asha@example.com"},
            "experience": [
                {"position": "Engineer", "company": "Acme", "startDate": "2021", "endDate": "2023"}
            ],
            "education": [],
            "skills": ["Rust"]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.name, "Asha Rao");
        assert_eq!(resume.experience[0].start_date, "2021");
        assert_eq!(resume.skills, vec!["Rust"]);
    }

    #[test]
    fn test_resume_data_tolerates_missing_fields() {
        let resume: ResumeData = serde_json::from_str("{}").unwrap();
        assert!(resume.is_empty());
    }

    #[test]
    fn test_to_prompt_text_is_deterministic_and_complete() {
        let resume = sample_resume();
        let a = resume.to_prompt_text();
        let b = resume.to_prompt_text();
        assert_eq!(a, b);
        assert!(a.contains("Software Engineer at Acme Corp"));
        assert!(a.contains("B.Tech in Computer Science"));
        assert!(a.contains("SKILLS: Rust, PostgreSQL"));
    }

    #[test]
    fn test_is_empty_false_with_skills_only() {
        let resume = ResumeData {
            skills: vec!["Go".to_string()],
            ..Default::default()
        };
        assert!(!resume.is_empty());
    }
}
