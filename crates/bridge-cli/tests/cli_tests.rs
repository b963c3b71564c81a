use std::fs;

use bridge_cli::{run, Options};
use tempfile::TempDir;

const PACKAGE: &str = r#"{
    "name": "org.example",
    "imports": [{"file": "base.fidl"}],
    "typecollections": {
        "Types": {
            "name": "Types",
            "enumerations": {
                "Mode": {
                    "name": "Mode",
                    "enumerators": {"Off": {"name": "Off"}, "On": {"name": "On"}}
                }
            },
            "structs": {
                "Legacy": {"name": "Legacy", "polymorphic": true}
            }
        }
    }
}"#;

fn write_input(dir: &TempDir, contents: &str) -> anyhow::Result<std::path::PathBuf> {
    let path = dir.path().join("package.json");
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_unsupported_input_fails_by_default() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, PACKAGE)?;

    let err = run(&Options::new(input)).unwrap_err();
    assert!(format!("{err:#}").contains("polymorphic"));
    Ok(())
}

#[test]
fn test_allow_unsupported_writes_output_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, PACKAGE)?;
    let output = dir.path().join("out.yaml");

    let mut options = Options::new(input);
    options.allow_unsupported = true;
    options.output = Some(output.clone());
    let report = run(&options)?;

    assert_eq!(report.written_to.as_deref(), Some(output.as_path()));
    assert_eq!(report.diagnostics.len(), 1);

    let yaml = fs::read_to_string(&output)?;
    assert_eq!(yaml, report.yaml);
    assert!(yaml.contains("file: base.ifex"));
    assert!(yaml.contains("name: Mode"));
    assert!(yaml.contains("name: Legacy"));
    Ok(())
}

#[test]
fn test_strict_fails_on_error_diagnostics() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, PACKAGE)?;
    let output = dir.path().join("out.yaml");

    let mut options = Options::new(input);
    options.allow_unsupported = true;
    options.strict = true;
    options.output = Some(output.clone());

    assert!(run(&options).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_stdout_mode_returns_yaml() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, r#"{"name": "plain"}"#)?;

    let report = run(&Options::new(input))?;
    assert!(report.written_to.is_none());
    assert!(report.diagnostics.is_empty());
    assert!(report.yaml.contains("name: plain"));
    Ok(())
}

#[test]
fn test_missing_input_file() {
    let err = run(&Options::new("/nonexistent/package.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_max_depth_is_enforced() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, PACKAGE)?;

    let mut options = Options::new(input);
    options.allow_unsupported = true;
    options.max_depth = 2;
    let err = run(&options).unwrap_err();
    assert!(format!("{err:#}").contains("maximum nesting depth"));
    Ok(())
}
