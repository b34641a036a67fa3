//! Technology detection against a fixed vocabulary.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Terms recognised in résumé text, as reported.
pub const VOCABULARY: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "C", "C++", "C#", "Go", "Rust", "Ruby", "PHP",
    "Kotlin", "Swift", "Scala", "R", "SQL", "HTML", "CSS", "Bash", "React", "Angular", "Vue",
    "Next.js", "Node.js", "Express", "Django", "Flask", "FastAPI", "Spring", "Spring Boot",
    ".NET", "Laravel", "Rails", "TensorFlow", "PyTorch", "scikit-learn", "Pandas", "NumPy",
    "Docker", "Kubernetes", "Terraform", "AWS", "Azure", "GCP", "Linux", "Git", "GraphQL",
    "REST", "PostgreSQL", "MySQL", "MongoDB", "Redis", "Kafka", "Elasticsearch", "Firebase",
    "Jenkins", "CI/CD",
];

/// One pattern per vocabulary term, matched case-insensitively and bounded
/// by non-alphanumeric characters so `Go` does not match `Google`.
static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .map(|term| {
            let pattern = format!(
                r"(?i)(?:^|[^A-Za-z0-9]){}(?:$|[^A-Za-z0-9+#])",
                regex::escape(term)
            );
            let regex = Regex::new(&pattern).expect("escaped vocabulary term is a valid pattern");
            (*term, regex)
        })
        .collect()
});

/// Returns every vocabulary term found in `text`.
#[must_use]
pub fn detect(text: &str) -> BTreeSet<&'static str> {
    PATTERNS
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_terms_on_boundaries() {
        let found = detect("Built services in Rust and Go; deployed on AWS with Docker.");
        assert!(found.contains("Rust"));
        assert!(found.contains("Go"));
        assert!(found.contains("AWS"));
        assert!(found.contains("Docker"));
        assert!(!found.contains("R"));
    }

    #[test]
    fn does_not_match_inside_words() {
        let found = detect("Worked at Google on Gorilla tooling");
        assert!(!found.contains("Go"));
    }

    #[test]
    fn distinguishes_c_family() {
        let found = detect("Languages: C++, C#");
        assert!(found.contains("C++"));
        assert!(found.contains("C#"));
        assert!(!found.contains("C"));
    }

    #[test]
    fn matches_dotted_terms() {
        let found = detect("node.js and next.js, some .NET");
        assert!(found.contains("Node.js"));
        assert!(found.contains("Next.js"));
        assert!(found.contains(".NET"));
    }
}
