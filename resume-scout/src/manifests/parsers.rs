//! Per-grammar dependency extraction.
//!
//! Each function takes decoded manifest content and returns the dependencies
//! the manifest declares. Nothing here resolves transitive dependencies.

use super::error::ManifestError;
use super::{DependencyMap, MANAGED};
use serde_json::Value;

/// Sections of `package.json` merged into one map, in overwrite order.
const NODE_SECTIONS: [&str; 3] = ["dependencies", "devDependencies", "peerDependencies"];

/// Characters that end the package name in a requirements line.
const REQUIREMENT_OPERATORS: [char; 5] = ['=', '<', '>', '!', '~'];

/// `package.json`: union of the three dependency sections, later sections
/// overwriting earlier ones on key collision.
pub fn parse_package_json(value: &Value) -> Result<DependencyMap, ManifestError> {
    let root = value
        .as_object()
        .ok_or_else(|| ManifestError::Structure("package.json root is not an object".into()))?;

    let mut deps = DependencyMap::new();
    for section in NODE_SECTIONS {
        if let Some(entries) = root.get(section).and_then(Value::as_object) {
            for (name, version) in entries {
                deps.insert(name.clone(), json_version(version));
            }
        }
    }
    Ok(deps)
}

/// `composer.json`: the `require` object as-is.
pub fn parse_composer_json(value: &Value) -> Result<DependencyMap, ManifestError> {
    let root = value
        .as_object()
        .ok_or_else(|| ManifestError::Structure("composer.json root is not an object".into()))?;

    Ok(root
        .get("require")
        .and_then(Value::as_object)
        .map(|require| {
            require
                .iter()
                .map(|(name, version)| (name.clone(), json_version(version)))
                .collect()
        })
        .unwrap_or_default())
}

fn json_version(value: &Value) -> String {
    match value {
        Value::String(version) => version.clone(),
        other => other.to_string(),
    }
}

/// `requirements.txt`: package name (text before the first operator
/// character) mapped to the whole requirement line.
pub fn parse_requirements(content: &str) -> DependencyMap {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = line
                .split(REQUIREMENT_OPERATORS.as_slice())
                .next()
                .unwrap_or(line)
                .trim();
            (!name.is_empty()).then(|| (name.to_string(), line.to_string()))
        })
        .collect()
}

/// `pyproject.toml`: the `[tool.poetry.dependencies]` table.
pub fn parse_pyproject(content: &str) -> Result<DependencyMap, ManifestError> {
    let document: toml::Table = toml::from_str(content)?;
    let deps = document
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.get("dependencies"));
    toml_dependencies(deps, "tool.poetry.dependencies")
}

/// `Cargo.toml`: the top-level `[dependencies]` table.
pub fn parse_cargo_toml(content: &str) -> Result<DependencyMap, ManifestError> {
    let document: toml::Table = toml::from_str(content)?;
    toml_dependencies(document.get("dependencies"), "dependencies")
}

fn toml_dependencies(
    table: Option<&toml::Value>,
    section: &str,
) -> Result<DependencyMap, ManifestError> {
    let Some(table) = table else {
        return Ok(DependencyMap::new());
    };
    let table = table
        .as_table()
        .ok_or_else(|| ManifestError::Structure(format!("`{section}` is not a table")))?;

    Ok(table
        .iter()
        .map(|(name, spec)| (name.clone(), toml_version(spec)))
        .collect())
}

/// Version requirement of a TOML dependency entry. Detailed entries without
/// a `version` key (path, git, workspace) are reported as managed.
fn toml_version(spec: &toml::Value) -> String {
    match spec {
        toml::Value::String(version) => version.clone(),
        toml::Value::Table(detail) => detail
            .get("version")
            .and_then(toml::Value::as_str)
            .unwrap_or(MANAGED)
            .to_string(),
        _ => MANAGED.to_string(),
    }
}

/// `pom.xml`: every `<dependency>` element as `groupId:artifactId`.
///
/// Elements are matched in the namespace of the root `<project>` element,
/// so a POM declaring the Maven namespace only yields Maven-qualified
/// dependencies. Dependencies missing either coordinate are skipped.
pub fn parse_pom(content: &str) -> Result<DependencyMap, ManifestError> {
    let document = roxmltree::Document::parse(content)?;
    let namespace = document.root_element().tag_name().namespace();

    let is_named = |node: &roxmltree::Node<'_, '_>, name: &str| {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == namespace
    };

    let mut deps = DependencyMap::new();
    for dependency in document.descendants().filter(|n| is_named(n, "dependency")) {
        let coordinate = |name: &str| {
            dependency
                .children()
                .find(|child| is_named(child, name))
                .and_then(|child| child.text())
                .map(str::trim)
                .filter(|text| !text.is_empty())
        };
        if let (Some(group), Some(artifact)) = (coordinate("groupId"), coordinate("artifactId")) {
            deps.insert(format!("{group}:{artifact}"), MANAGED.to_string());
        }
    }
    Ok(deps)
}

/// `go.mod`: two-token lines other than `module`, `require` and comments.
///
/// Lines inside a `require ( ... )` block qualify; single-line
/// `require x v1` directives start with `require` and are skipped, and
/// directives such as `go 1.22` are kept as-is.
pub fn parse_go_mod(content: &str) -> DependencyMap {
    content
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.starts_with("module") && !line.starts_with("require") && !line.starts_with("//")
        })
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(name), Some(version)) => Some((name.to_string(), version.to_string())),
                _ => None,
            }
        })
        .collect()
}

/// `*.csproj`: every `<PackageReference>` as `Include` → `Version`.
pub fn parse_csproj(content: &str) -> Result<DependencyMap, ManifestError> {
    let document = roxmltree::Document::parse(content)?;
    Ok(document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "PackageReference")
        .filter_map(|node| {
            let name = node.attribute("Include")?;
            let version = node.attribute("Version").unwrap_or(MANAGED);
            Some((name.to_string(), version.to_string()))
        })
        .collect())
}
