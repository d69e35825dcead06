use anyhow::Result;
use std::path::Path;
use crate::analyzers::ast_analyzer::AngularAstAnalyzer;
use crate::types::{AngularFeatures, CategoryStats, ComponentStats, FileAnalysis, ScanConfig};
use crate::utils::file_utils;

/// Walks a project tree and folds every file's analysis into one
/// `AngularFeatures` total. Files are processed one at a time in walk order;
/// a file that cannot be read or parsed contributes nothing.
pub struct ProjectAnalyzer {
    ast_analyzer: AngularAstAnalyzer,
    config: ScanConfig,
    legacy: bool,
    verbose: bool,
}

impl ProjectAnalyzer {
    pub fn new(legacy: bool, verbose: bool) -> Result<Self> {
        Self::with_config(ScanConfig::default(), legacy, verbose)
    }

    pub fn with_config(config: ScanConfig, legacy: bool, verbose: bool) -> Result<Self> {
        Ok(ProjectAnalyzer {
            ast_analyzer: AngularAstAnalyzer::new()?,
            config,
            legacy,
            verbose,
        })
    }

    pub fn analyze_project(&mut self, root: &Path) -> Result<AngularFeatures> {
        let mut features = AngularFeatures {
            modules: 0,
            services: 0,
            components: ComponentStats {
                total: 0,
                standalone: 0,
                not_standalone: 0,
                on_push: 0,
                default: 0,
            },
            directives: CategoryStats {
                total: 0,
                standalone: 0,
                not_standalone: 0,
            },
            pipes: CategoryStats {
                total: 0,
                standalone: 0,
                not_standalone: 0,
            },
        };

        let files = file_utils::collect_source_files(root, &self.config)?;
        for file_path in files {
            let content = match file_utils::read_file_content(&file_path) {
                Ok(content) => content,
                Err(_) => continue,
            };
            let path_text = file_path.to_string_lossy();
            let analysis = match self.ast_analyzer.analyze_file(&content, &path_text, self.legacy) {
                Ok(analysis) => analysis,
                Err(_) => continue,
            };
            self.fold_file(&mut features, &analysis, &path_text);
        }

        Ok(features)
    }

    fn fold_file(&self, features: &mut AngularFeatures, analysis: &FileAnalysis, file_path: &str) {
        features.modules += analysis.ng_module_count;
        if self.verbose && analysis.ng_module_count > 0 {
            println!("[NgModule] {}", file_path);
        }

        // Every @Injectable class, exported or not.
        features.services += analysis.injectable_classes;

        for component in &analysis.components {
            features.components.total += 1;
            if component.standalone {
                features.components.standalone += 1;
            } else {
                features.components.not_standalone += 1;
                if self.verbose {
                    println!("[non-standalone component] {}", component.file_path);
                }
            }
            if component.on_push {
                features.components.on_push += 1;
            } else {
                features.components.default += 1;
                if self.verbose {
                    println!("[default change detection] {}", component.file_path);
                }
            }
        }

        for directive in &analysis.directives {
            features.directives.total += 1;
            if directive.standalone {
                features.directives.standalone += 1;
            } else {
                features.directives.not_standalone += 1;
                if self.verbose {
                    println!("[non-standalone directive] {}", directive.file_path);
                }
            }
        }

        for pipe in &analysis.pipes {
            features.pipes.total += 1;
            if pipe.standalone {
                features.pipes.standalone += 1;
            } else {
                features.pipes.not_standalone += 1;
                if self.verbose {
                    println!("[non-standalone pipe] {}", pipe.file_path);
                }
            }
        }
    }
}
