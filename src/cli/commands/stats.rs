use anyhow::{bail, Result};
use std::path::Path;
use crate::analyzers::ProjectAnalyzer;
use crate::generators::ReportGenerator;

pub fn run_stats(path: &Path, json: bool, legacy: bool, verbose: bool) -> Result<()> {
    if !path.is_dir() {
        bail!(
            "The specified path '{}' does not exist or is not a directory",
            path.display()
        );
    }
    let root = path.canonicalize()?;

    if !legacy {
        // Notice goes to stderr so --json output stays machine-readable.
        eprintln!("Assuming Angular v19+ (standalone by default). Use --legacy for v14-v18 behavior.");
    }

    let mut analyzer = ProjectAnalyzer::new(legacy, verbose)?;
    let features = analyzer.analyze_project(&root)?;

    let report_generator = ReportGenerator::new();
    if json {
        println!("{}", report_generator.generate_json_report(&features)?);
    } else {
        println!("{}", report_generator.generate_table_report(&features, &root)?);
    }

    Ok(())
}
