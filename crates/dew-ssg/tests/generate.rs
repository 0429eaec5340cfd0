//! File-level generation flow.

use dew_ssg::{GenerateError, generate_to_file};
use dew_ui::App;

#[test]
fn generates_the_app_page_from_a_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("index.html");
    std::fs::write(
        &template,
        "<html><head><title>Editor</title></head><body><div id=\"app\"></div></body></html>",
    )
    .unwrap();

    let out = dir.path().join("dist/index.html");
    let tree = App::new().render();
    generate_to_file(&template, &out, "app", &tree).unwrap();

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>\n"));
    assert!(page.contains("<title>Editor</title>"));
    assert!(page.contains("<div id=\"app\"><div"));
    assert!(page.contains("<input type=\"text\""));
    assert!(page.contains(">Add</button>"));
    assert!(page.contains("<textarea"));
}

#[test]
fn reports_a_template_without_a_mount() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("bare.html");
    std::fs::write(&template, "<html><body><p>nothing here</p></body></html>").unwrap();

    let out = dir.path().join("dist/index.html");
    let tree = App::new().render();
    let result = generate_to_file(&template, &out, "app", &tree);
    assert!(matches!(result, Err(GenerateError::MountMissing(_))));
    assert!(!out.exists());
}

#[test]
fn missing_template_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("absent.html");
    let out = dir.path().join("dist/index.html");
    let tree = App::new().render();
    let result = generate_to_file(&template, &out, "app", &tree);
    assert!(matches!(result, Err(GenerateError::Io(_))));
}
