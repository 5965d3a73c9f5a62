use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use bpmnview_cli::{Args, error_adapter::render_warning, run};

/// Directory holding the demo files, at the workspace root.
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .bpmn files from a directory
fn collect_bpmn_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("bpmn")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_bpmn_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should be written");
                assert!(svg.contains("<svg"), "{} produced no SVG", demo_path.display());
                assert!(svg.contains(r#"id="arrowhead""#));
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_bpmn_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} wrote output despite failing",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.bpmn");
    let output = temp_dir.path().join("out.svg");

    let err = run(&args_for(&missing, &output)).unwrap_err();
    assert!(matches!(err, bpmnview::BpmnViewError::Io(_)));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[canvas]\nwidth = 1024\nheight = 768\n\n[style]\nbackground_color = \"#fafafa\"\n",
    )
    .unwrap();
    let output = temp_dir.path().join("simple.svg");

    let mut args = args_for(&demos_dir().join("simple_task.bpmn"), &output);
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("Rendering with config should succeed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 1024 768""#));
    assert!(svg.contains(r##"fill="#fafafa""##));
}

#[test]
fn e2e_import_warnings_are_reported_against_source() {
    let source = fs::read_to_string(demos_dir().join("import_warnings.bpmn")).unwrap();

    let (_, warnings) = bpmnview::model::parse_with_warnings(&source).unwrap();
    let reports: Vec<String> = warnings
        .iter()
        .map(|warning| render_warning(warning, &source))
        .collect();

    assert_eq!(reports.len(), 2, "{reports:#?}");
    assert!(reports[0].contains("E102"));
    assert!(reports[0].contains("isHorizontal"));
    assert!(reports[0].contains("the attribute is ignored"));
    assert!(reports[1].contains("E100"));
    assert!(reports[1].contains("Task_Removed"));
    assert!(reports[1].contains("unresolved reference"));
}

#[test]
fn e2e_decimal_bounds_are_drawn_as_recorded() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("warnings.svg");

    run(&args_for(&demos_dir().join("import_warnings.bpmn"), &output))
        .expect("Warnings should not fail the render");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"transform="translate(152.7, 80.25)""#));
    assert!(svg.contains(r#"width="100.1""#));
    assert!(!svg.contains("Removed_di"));
}
