//! Résumé section segmentation by header lines.

use serde::Serialize;
use std::collections::BTreeMap;

/// A résumé section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Contact,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

/// Header aliases, compared against a normalised line.
const HEADERS: &[(Section, &[&str])] = &[
    (
        Section::Contact,
        &["contact", "contact information", "contact details", "personal details"],
    ),
    (
        Section::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "work history",
            "internships",
        ],
    ),
    (
        Section::Education,
        &["education", "academic background", "academics", "qualifications"],
    ),
    (
        Section::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "technologies",
            "tech stack",
        ],
    ),
    (
        Section::Projects,
        &["projects", "personal projects", "academic projects", "side projects"],
    ),
    (
        Section::Certifications,
        &[
            "certifications",
            "certificates",
            "licenses & certifications",
            "licenses and certifications",
            "courses",
        ],
    ),
];

/// Lower-cases a line and drops decoration such as `:` or `##`.
fn normalize_header(line: &str) -> String {
    line.trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Returns the section a line introduces, if it is a header line.
#[must_use]
pub fn classify_header(line: &str) -> Option<Section> {
    let normalized = normalize_header(line);
    if normalized.is_empty() {
        return None;
    }
    HEADERS
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
        .map(|(section, _)| *section)
}

/// Splits a transcript into sections.
///
/// Text before the first header is attributed to [`Section::Contact`].
/// Repeated headers append to the same section. Sections without content
/// are omitted.
#[must_use]
pub fn segment(text: &str) -> BTreeMap<Section, String> {
    let mut sections: BTreeMap<Section, Vec<&str>> = BTreeMap::new();
    let mut current = Section::Contact;

    for line in text.lines() {
        if let Some(section) = classify_header(line) {
            current = section;
            continue;
        }
        let line = line.trim();
        if !line.is_empty() {
            sections.entry(current).or_default().push(line);
        }
    }

    sections
        .into_iter()
        .map(|(section, lines)| (section, lines.join("\n")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_decorated_headers() {
        assert_eq!(classify_header("EXPERIENCE"), Some(Section::Experience));
        assert_eq!(classify_header("  Technical Skills:"), Some(Section::Skills));
        assert_eq!(classify_header("## Projects"), Some(Section::Projects));
        assert_eq!(classify_header("Built projects in Rust"), None);
    }

    #[test]
    fn segments_transcript() {
        let text = "Alice Smith\nalice@example.com\nExperience\nEngineer at Acme\nEducation\nBSc CS\nSkills\nRust, Go\n";
        let sections = segment(text);

        assert_eq!(sections[&Section::Contact], "Alice Smith\nalice@example.com");
        assert_eq!(sections[&Section::Experience], "Engineer at Acme");
        assert_eq!(sections[&Section::Education], "BSc CS");
        assert_eq!(sections[&Section::Skills], "Rust, Go");
        assert!(!sections.contains_key(&Section::Projects));
    }
}
