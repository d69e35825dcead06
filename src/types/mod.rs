use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Classification of a single `@Component` class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub file_path: String,
    pub standalone: bool,
    pub on_push: bool,
}

/// Classification of a single `@Directive` or `@Pipe` class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneRecord {
    pub file_path: String,
    pub standalone: bool,
}

/// Everything extracted from one source file. Produced once per file and
/// folded into `AngularFeatures` exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    pub components: Vec<ComponentRecord>,
    pub directives: Vec<StandaloneRecord>,
    pub pipes: Vec<StandaloneRecord>,
    pub ng_module_count: usize,
    pub injectable_classes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStats {
    pub total: usize,
    pub standalone: usize,
    pub not_standalone: usize,
    pub on_push: usize,
    pub default: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub total: usize,
    pub standalone: usize,
    pub not_standalone: usize,
}

/// Project-wide totals. Invariants: `standalone + not_standalone == total`
/// for every category, and `on_push + default == total` for components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AngularFeatures {
    pub modules: usize,
    pub services: usize,
    pub components: ComponentStats,
    pub directives: CategoryStats,
    pub pipes: CategoryStats,
}

/// Walker policy: which files count as sources and which parts of the tree
/// are skipped. Passed to the collector instead of living in global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub ignore_dirs: HashSet<String>,
    pub ignore_file_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            extensions: vec![".ts".to_string()],
            ignore_dirs: ["node_modules", "dist", "build", "cache"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignore_file_patterns: vec![
                ".stories.ts".to_string(),
                ".spec.ts".to_string(),
                ".d.ts".to_string(),
            ],
        }
    }
}
