//! Content store: the student manifest and per-tier data files.
//!
//! `manifest.json` holds the fixed student roster and the tier descriptors;
//! each tier points at one data file of raw vocabulary/verb/sentence
//! records. Tier data is normalized once at load and cached, since items
//! are a pure function of the file contents.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use review_core::{normalize, ItemBundle};

/// One student in the fixed roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub tier: String,
    #[serde(default)]
    pub emoji: String,
}

/// Tier descriptor from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierInfo {
    pub file: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    students: Vec<Student>,
    tiers: HashMap<String, TierInfo>,
}

/// Loaded manifest plus normalized item bundles per tier.
pub struct ContentLibrary {
    students: Vec<Student>,
    bundles: HashMap<String, ItemBundle>,
}

impl ContentLibrary {
    /// Load `manifest.json` and every tier data file under `dir`.
    ///
    /// A broken manifest is fatal (the roster is required), but a tier file
    /// that is missing or unreadable only logs a warning and yields an
    /// empty bundle: students on that tier see empty sessions instead of a
    /// failed startup.
    pub fn load(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join("manifest.json");
        let manifest_json = fs::read_to_string(&manifest_path)
            .with_context(|| format!("failed to read {}", manifest_path.display()))?;
        let manifest: Manifest = serde_json::from_str(&manifest_json)
            .with_context(|| format!("invalid manifest {}", manifest_path.display()))?;

        let mut bundles = HashMap::new();
        for (tier, info) in &manifest.tiers {
            let path = dir.join(&info.file);
            let raw = match fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<serde_json::Value>(&json) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        tracing::warn!(
                            "tier {tier}: invalid JSON in {}: {err}",
                            path.display()
                        );
                        None
                    }
                },
                Err(err) => {
                    tracing::warn!("tier {tier}: cannot read {}: {err}", path.display());
                    None
                }
            };
            bundles.insert(tier.clone(), normalize(raw.as_ref()));
        }

        Ok(Self {
            students: manifest.students,
            bundles,
        })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn tier_count(&self) -> usize {
        self.bundles.len()
    }

    /// Normalized items for a student's tier, if both exist.
    pub fn bundle_for(&self, student_id: &str) -> Option<&ItemBundle> {
        let student = self.student(student_id)?;
        self.bundles.get(&student.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn write_library(dir: &Path, tier_json: &str) {
        let manifest = json!({
            "students": [
                { "id": "mina", "name": "Mina", "tier": "beginner", "emoji": "🐣" },
                { "id": "jun", "name": "Jun", "tier": "missing" },
            ],
            "tiers": {
                "beginner": { "file": "beginner.json", "label": "Beginner" },
                "missing": { "file": "nope.json" },
            }
        });
        fs::write(dir.join("manifest.json"), manifest.to_string()).unwrap();
        fs::write(dir.join("beginner.json"), tier_json).unwrap();
    }

    #[test]
    fn loads_roster_and_normalizes_tier_data() {
        let dir = tempfile::tempdir().unwrap();
        write_library(
            dir.path(),
            &json!({ "vocabulary": [{ "kr": "물", "en": "water" }] }).to_string(),
        );

        let library = ContentLibrary::load(dir.path()).unwrap();
        assert_eq!(library.students().len(), 2);
        assert_eq!(library.student("mina").unwrap().name, "Mina");
        assert!(library.student("nobody").is_none());

        let bundle = library.bundle_for("mina").unwrap();
        assert_eq!(bundle.vocabulary.len(), 1);
        assert_eq!(bundle.vocabulary[0].id, "vocab_0");
    }

    #[test]
    fn missing_tier_file_yields_empty_bundle() {
        let dir = tempfile::tempdir().unwrap();
        write_library(dir.path(), "{}");

        let library = ContentLibrary::load(dir.path()).unwrap();
        let bundle = library.bundle_for("jun").unwrap();
        assert!(bundle.all.is_empty());
    }

    #[test]
    fn corrupt_tier_file_yields_empty_bundle() {
        let dir = tempfile::tempdir().unwrap();
        write_library(dir.path(), "not json at all {");

        let library = ContentLibrary::load(dir.path()).unwrap();
        let bundle = library.bundle_for("mina").unwrap();
        assert!(bundle.all.is_empty());
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContentLibrary::load(dir.path()).is_err());
    }
}
