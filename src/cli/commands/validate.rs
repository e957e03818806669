use crate::cli::parser::ValidateArgs;
use crate::config::{validate, ConfigManager, ValidationResult};
use crate::utils::{MeldError, Result};
use std::path::Path;

pub fn execute(args: ValidateArgs) -> Result<()> {
    let path = ConfigManager::resolve_path(args.path.as_deref());
    let value = ConfigManager::load_value(&path)?;

    match validate(&value) {
        ValidationResult::Valid(_) => {
            println!("{}", render_report(&path, &[]));
            Ok(())
        }
        ValidationResult::Invalid(errors) => {
            eprintln!("{}", render_report(&path, &errors));
            Err(MeldError::validation(errors))
        }
    }
}

pub fn render_report(path: &Path, errors: &[String]) -> String {
    if errors.is_empty() {
        return format!("✅ {} is valid", path.display());
    }

    let mut report = format!("❌ {} has {} problem(s):", path.display(), errors.len());
    for error in errors {
        report.push_str("\n  - ");
        report.push_str(error);
    }
    report
}
