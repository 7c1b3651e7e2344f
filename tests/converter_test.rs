use flatten_tools::obj::{Conversion, convert_obj_file};
use std::fs;
use std::path::{Path, PathBuf};

fn artifacts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/artifacts")
}

/// Normalize an SVG for comparison - collapse whitespace between lines
fn normalize_svg(svg: &str) -> String {
    svg.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn svg_equal(a: &str, b: &str) -> bool {
    let a_norm = normalize_svg(a);
    let b_norm = normalize_svg(b);

    if a_norm != b_norm {
        eprintln!("Normalized SVG A:\n{}", a_norm);
        eprintln!("\nNormalized SVG B:\n{}", b_norm);
    }

    a_norm == b_norm
}

/// Copy the named OBJ artifact into the temp dir, convert it with a derived
/// output path, and compare the generated SVG against the expected artifact.
fn run_conversion_test(name: &str) {
    let artifacts_dir = artifacts_dir();
    let temp_dir = artifacts_dir.join("temp");
    fs::create_dir_all(&temp_dir).expect("Failed to create temp dir");

    let obj_path = temp_dir.join(format!("{}.obj", name));
    fs::copy(artifacts_dir.join(format!("{}.obj", name)), &obj_path)
        .unwrap_or_else(|_| panic!("Failed to copy {}.obj", name));

    let expected_svg = fs::read_to_string(artifacts_dir.join(format!("{}.svg", name)))
        .unwrap_or_else(|_| panic!("Failed to read {}.svg", name));

    let result = convert_obj_file(&obj_path, None)
        .unwrap_or_else(|e| panic!("Conversion of {}.obj failed: {}", name, e));

    let written = match result {
        Conversion::Written(path) => path,
        Conversion::Skipped => panic!("Conversion of {}.obj unexpectedly skipped", name),
    };
    assert_eq!(written, temp_dir.join(format!("{}.svg", name)));

    let generated_svg = fs::read_to_string(&written)
        .unwrap_or_else(|_| panic!("Failed to read generated {}.svg", name));

    assert!(
        svg_equal(&generated_svg, &expected_svg),
        "SVG mismatch for {}",
        name
    );
}

#[test]
fn test_square() {
    run_conversion_test("square");
}

#[test]
fn test_strip() {
    run_conversion_test("strip");
}

#[test]
fn test_no_uv_is_skipped_and_writes_nothing() {
    let artifacts_dir = artifacts_dir();
    let temp_dir = artifacts_dir.join("temp");
    fs::create_dir_all(&temp_dir).expect("Failed to create temp dir");

    let obj_path = temp_dir.join("no_uv.obj");
    fs::copy(artifacts_dir.join("no_uv.obj"), &obj_path).expect("Failed to copy no_uv.obj");
    let svg_path = temp_dir.join("no_uv.svg");
    let _ = fs::remove_file(&svg_path);

    let result = convert_obj_file(&obj_path, None).expect("Conversion should not fail");
    assert_eq!(result, Conversion::Skipped);
    assert!(!svg_path.exists(), "Skipped conversion must not write a file");
}

#[test]
fn test_malformed_vt_fails_and_writes_nothing() {
    let artifacts_dir = artifacts_dir();
    let temp_dir = artifacts_dir.join("temp");
    fs::create_dir_all(&temp_dir).expect("Failed to create temp dir");

    let obj_path = temp_dir.join("bad_vt.obj");
    fs::copy(artifacts_dir.join("bad_vt.obj"), &obj_path).expect("Failed to copy bad_vt.obj");
    let svg_path = temp_dir.join("bad_vt.svg");
    let _ = fs::remove_file(&svg_path);

    let err = convert_obj_file(&obj_path, None).unwrap_err();
    assert!(err.contains("line 2"), "unexpected error: {}", err);
    assert!(!svg_path.exists(), "Failed conversion must not write a file");
}

#[test]
fn test_missing_input_file_is_error() {
    let missing = artifacts_dir().join("does_not_exist.obj");
    let err = convert_obj_file(&missing, None).unwrap_err();
    assert!(
        err.contains("does_not_exist.obj"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_explicit_output_path() {
    let artifacts_dir = artifacts_dir();
    let temp_dir = artifacts_dir.join("temp");
    fs::create_dir_all(&temp_dir).expect("Failed to create temp dir");

    let out_path = temp_dir.join("square_explicit.svg");
    let _ = fs::remove_file(&out_path);

    let result = convert_obj_file(&artifacts_dir.join("square.obj"), Some(&out_path))
        .expect("Conversion failed");
    assert_eq!(result, Conversion::Written(out_path.clone()));
    assert!(out_path.exists());
}
