use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_emblem_gen(args: &[&str], output_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_emblem-gen"))
        .args(args)
        .arg("-o")
        .arg(output_dir)
        .output()
        .expect("Failed to run emblem-gen command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("emblem-gen command failed");
    }
}

fn assert_png_size(path: &Path, size: u32) {
    assert!(path.exists(), "Output icon should exist at: {}", path.display());
    let icon = image::open(path).expect("Failed to load generated icon");
    assert_eq!(icon.width(), size, "width of {}", path.display());
    assert_eq!(icon.height(), size, "height of {}", path.display());
}

/// `emblem-gen --preset classic` writes the master and the four preview sizes
#[test]
fn test_classic_preset_outputs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");

    let output = run_emblem_gen(&["--preset", "classic"], &output_dir);
    assert_success(&output);

    for size in [1024, 512, 180, 120, 60] {
        assert_png_size(
            &output_dir.join(format!("NutriBalance-AppIcon-{size}.png")),
            size,
        );
    }
    assert!(!output_dir.join("Contents.json").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated NutriBalance-AppIcon-60.png"));
}

/// `emblem-gen --preset v2 --asset-catalog` fills every iOS slot and describes it in Contents.json
#[test]
fn test_refined_preset_with_asset_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("AppIcon.appiconset");

    let output = run_emblem_gen(&["--preset", "v2", "--asset-catalog"], &output_dir);
    assert_success(&output);

    assert_png_size(&output_dir.join("NutriBalance-AppIcon-1024.png"), 1024);
    assert_png_size(&output_dir.join("Icon-AppStore.png"), 1024);
    assert_png_size(&output_dir.join("Icon-iPad-Pro-83.5@2x.png"), 167);
    assert_png_size(&output_dir.join("Icon-Settings-29@1x.png"), 29);
    assert_png_size(&output_dir.join("Icon-Spotlight-40@3x.png"), 120);

    let contents = std::fs::read_to_string(output_dir.join("Contents.json"))
        .expect("Failed to read Contents.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&contents).expect("Contents.json should contain valid JSON");

    let images = parsed["images"].as_array().unwrap();
    assert_eq!(images.len(), 12);
    for (i, image) in images.iter().enumerate() {
        let filename = image["filename"].as_str().expect("filename");
        assert!(
            output_dir.join(filename).exists(),
            "Image entry {} points at missing file {}",
            i,
            filename
        );
        assert!(image["idiom"].is_string(), "Image entry {} should have idiom", i);
        assert!(image["scale"].is_string(), "Image entry {} should have scale", i);
        assert!(image["size"].is_string(), "Image entry {} should have size", i);
    }
    assert_eq!(parsed["info"]["version"], 1);
}

/// Custom sizes replace the preset manifest, and repeated runs produce identical bytes
#[test]
fn test_custom_sizes_are_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    assert_success(&run_emblem_gen(&["--png", "64,32"], &first));
    assert_success(&run_emblem_gen(&["--png", "64,32"], &second));

    for size in [64, 32] {
        let name = format!("{size}x{size}.png");
        assert_png_size(&first.join(&name), size);
        let a = std::fs::read(first.join(&name)).unwrap();
        let b = std::fs::read(second.join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
    assert!(!first.join("NutriBalance-AppIcon-1024.png").exists());
}

#[test]
fn test_zero_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");

    let output = run_emblem_gen(&["--png", "0"], &output_dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("greater than zero"), "stderr: {stderr}");
    assert!(!output_dir.exists());
}

#[test]
fn test_unwritable_destination_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"occupied").unwrap();

    let output = run_emblem_gen(&["--png", "16"], &blocker.join("icons"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Can't create output directory"), "stderr: {stderr}");
}
