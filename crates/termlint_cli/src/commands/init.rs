//! Init command implementation

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use termlint_core::CONFIG_FILE_NAMES;
use tracing::info;

const DEFAULT_CONFIG: &str = r#"{
  // Terms are regular expressions matched case-sensitively.
  "rules": {
    "uppercase-terms": {
      "terms": ["id"]
    }
  },
  "exclude": []
}
"#;

/// Writes a default `.termlint.jsonc` in the current directory.
pub fn run_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAMES[0]);

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    match options.open(config_path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
            info!("Created {}", config_path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(miette::miette!(
            "Config file already exists. Use --force to overwrite."
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}
