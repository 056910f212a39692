//! Mentor and mentee profile records as returned by the Weave API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub contact_email: String,
    pub image_url: Option<String>,

    pub affiliations: Vec<String>,
    pub degrees: Vec<String>,
    pub clinical_specialties: Vec<String>,
    pub professional_interests: Vec<String>,
    pub parts_of_me: Vec<String>,
    pub activities: Vec<String>,

    pub additional_information: String,
    pub cadence: String,
    pub other_cadence: Option<String>,

    pub willing_shadowing: bool,
    pub willing_networking: bool,
    pub willing_goal_setting: bool,
    pub willing_discuss_personal: bool,
    pub willing_career_guidance: bool,
    pub willing_student_group: bool,

    pub date_updated: Option<String>,
}

impl Profile {
    /// Every tag attached to the profile, in display order.
    pub fn display_tags(&self) -> impl Iterator<Item = &String> {
        self.clinical_specialties
            .iter()
            .chain(self.professional_interests.iter())
            .chain(self.parts_of_me.iter())
            .chain(self.activities.iter())
    }

    /// Labels for the mentoring activities the profile is open to.
    pub fn willing_labels(&self) -> Vec<&'static str> {
        let flags = [
            (self.willing_shadowing, "Shadowing"),
            (self.willing_networking, "Networking"),
            (self.willing_goal_setting, "Goal setting"),
            (self.willing_discuss_personal, "Discussing personal topics"),
            (self.willing_career_guidance, "Career guidance"),
            (self.willing_student_group, "Student group mentoring"),
        ];
        flags.into_iter().filter(|(on, _)| *on).map(|(_, label)| label).collect()
    }

    pub fn cadence_label(&self) -> &str {
        match (&self.other_cadence, self.cadence.as_str()) {
            (Some(other), "other") if !other.is_empty() => other,
            (_, cadence) => cadence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_profile_with_missing_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "p-1", "name": "Ada", "imageUrl": "https://img/1.png", "clinicalSpecialties": ["Cardiology"], "willingShadowing": true}"#,
        )
        .unwrap();
        assert_eq!(profile.id, ProfileId("p-1".to_string()));
        assert_eq!(profile.image_url.as_deref(), Some("https://img/1.png"));
        assert_eq!(profile.clinical_specialties, vec!["Cardiology".to_string()]);
        assert!(profile.affiliations.is_empty());
        assert_eq!(profile.willing_labels(), vec!["Shadowing"]);
    }

    #[test]
    fn other_cadence_overrides_label() {
        let profile = Profile {
            cadence: "other".to_string(),
            other_cadence: Some("Every full moon".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.cadence_label(), "Every full moon");

        let monthly = Profile { cadence: "monthly".to_string(), ..Default::default() };
        assert_eq!(monthly.cadence_label(), "monthly");
    }
}
