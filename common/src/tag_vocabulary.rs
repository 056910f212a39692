//! Allowed tag values per profile category.
//!
//! The vocabulary is plain configuration: the defaults below can be replaced
//! per category by a JSON document such as
//! `{"degrees": ["MD / DO", "PhD"], "affiliations": ["MGH"]}`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Degrees,
    Affiliations,
    ClinicalSpecialties,
    ProfessionalInterests,
    Activities,
    PartsOfMe,
}

impl TagCategory {
    pub const ALL: [TagCategory; 6] = [
        TagCategory::Degrees,
        TagCategory::Affiliations,
        TagCategory::ClinicalSpecialties,
        TagCategory::ProfessionalInterests,
        TagCategory::Activities,
        TagCategory::PartsOfMe,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TagCategory::Degrees => "Degrees",
            TagCategory::Affiliations => "Affiliations",
            TagCategory::ClinicalSpecialties => "Clinical Specialties",
            TagCategory::ProfessionalInterests => "Professional Interests",
            TagCategory::Activities => "Activities I Enjoy",
            TagCategory::PartsOfMe => "Parts of Me",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagVocabulary {
    categories: BTreeMap<TagCategory, Vec<String>>,
}

const DEGREES: &[&str] = &["MD / DO", "DMD / DDS", "PhD", "MPH", "MBA", "MS", "PharmD", "NP", "PA", "RN"];

const AFFILIATIONS: &[&str] = &[
    "Beth Israel Deaconess Medical Center",
    "Boston Children's Hospital",
    "Brigham and Women's Hospital",
    "Cambridge Health Alliance",
    "Dana-Farber Cancer Institute",
    "Harvard Medical School",
    "Harvard School of Dental Medicine",
    "Joslin Diabetes Center",
    "Massachusetts Eye and Ear",
    "Massachusetts General Hospital",
    "McLean Hospital",
    "Mount Auburn Hospital",
    "Spaulding Rehabilitation Hospital",
    "VA Boston Healthcare System",
];

const CLINICAL_SPECIALTIES: &[&str] = &[
    "Anesthesiology",
    "Cardiology",
    "Dermatology",
    "Emergency Medicine",
    "Family Medicine",
    "Internal Medicine",
    "Neurology",
    "Obstetrics and Gynecology",
    "Oncology",
    "Ophthalmology",
    "Orthopedic Surgery",
    "Pathology",
    "Pediatrics",
    "Psychiatry",
    "Radiology",
    "Surgery",
];

const PROFESSIONAL_INTERESTS: &[&str] = &[
    "Advocacy",
    "Clinical Research",
    "Global Health",
    "Health Policy",
    "Medical Education",
    "Public Health",
    "Quality Improvement",
    "Wellness",
];

const ACTIVITIES: &[&str] = &["Cooking", "Hiking", "Music", "Reading", "Running", "Travel", "Yoga"];

const PARTS_OF_ME: &[&str] = &["First Generation College Student", "LGBTQ+", "Parent", "Veteran"];

impl Default for TagVocabulary {
    fn default() -> Self {
        let defaults = [
            (TagCategory::Degrees, DEGREES),
            (TagCategory::Affiliations, AFFILIATIONS),
            (TagCategory::ClinicalSpecialties, CLINICAL_SPECIALTIES),
            (TagCategory::ProfessionalInterests, PROFESSIONAL_INTERESTS),
            (TagCategory::Activities, ACTIVITIES),
            (TagCategory::PartsOfMe, PARTS_OF_ME),
        ];
        Self {
            categories: defaults
                .into_iter()
                .map(|(category, tags)| (category, tags.iter().map(|t| t.to_string()).collect()))
                .collect(),
        }
    }
}

impl TagVocabulary {
    pub fn tags(&self, category: TagCategory) -> &[String] {
        self.categories.get(&category).map(|t| t.as_slice()).unwrap_or(&[])
    }

    /// Replaces the tags of `category`, dropping blanks and case-insensitive duplicates.
    pub fn set_tags(&mut self, category: TagCategory, tags: Vec<String>) {
        let mut seen = BTreeSet::new();
        let tags = tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
            .collect();
        self.categories.insert(category, tags);
    }

    /// Tags of `category` followed by any `selected` value the vocabulary lacks,
    /// so a filter carried over from elsewhere can still be deselected.
    pub fn options_with_selected(&self, category: TagCategory, selected: &BTreeSet<String>) -> Vec<String> {
        let mut options = self.tags(category).to_vec();
        for value in selected {
            if !options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
                options.push(value.clone());
            }
        }
        options
    }

    /// Default vocabulary with every category present in `json` replaced.
    pub fn from_json_overrides(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: BTreeMap<TagCategory, Vec<String>> = serde_json::from_str(json)?;
        let mut vocabulary = Self::default();
        for (category, tags) in overrides {
            vocabulary.set_tags(category, tags);
        }
        Ok(vocabulary)
    }
}
