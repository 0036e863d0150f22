use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use sitegen::{BuildError, Config, generate_pages, sync_dir};

#[test]
fn builds_a_small_site_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content/posts")).unwrap();
    fs::create_dir_all(root.join("static/css")).unwrap();
    fs::write(root.join("static/css/site.css"), "body {}").unwrap();
    fs::write(
        root.join("content/index.md"),
        "# Home\n\nWelcome to **sitegen**.",
    )
    .unwrap();
    fs::write(
        root.join("content/posts/first.md"),
        "# First post\n\nSome `code` here.",
    )
    .unwrap();
    let template =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    let output = root.join("public");
    sync_dir(&root.join("static"), &output).unwrap();
    generate_pages(&root.join("content"), template, &output).unwrap();

    assert!(output.join("css/site.css").exists());
    assert_eq!(
        fs::read_to_string(output.join("index.html")).unwrap(),
        "<html><head><title>Home</title></head>\
         <body><div><h1>Home</h1><p>Welcome to <b>sitegen</b>.</p></div></body></html>"
    );
    let post = fs::read_to_string(output.join("posts/first.html")).unwrap();
    assert!(post.contains("<title>First post</title>"));
    assert!(post.contains("<p>Some <code>code</code> here.</p>"));
}

#[test]
fn config_file_reshapes_the_layout() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("sitegen.toml"),
        "content = \"docs\"\noutput = \"dist\"\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/page.md"), "# Page\n\ntext").unwrap();

    let config = Config::load(&root.join("sitegen.toml"));
    generate_pages(
        &root.join(&config.content),
        "{{ Content }}",
        &root.join(&config.output),
    )
    .unwrap();

    assert!(root.join("dist/page.html").exists());
}

#[test]
fn missing_assets_directory_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(root.join("content/index.md"), "# Home\n\nhi").unwrap();
    fs::write(root.join("template.html"), "{{ Content }}").unwrap();
    // no static/ directory at all

    let run = Command::new(env!("CARGO_BIN_EXE_sitegen"))
        .arg(root)
        .output()
        .unwrap();

    assert!(!run.status.success());
    assert!(String::from_utf8_lossy(&run.stderr).contains("Error copying assets"));
    assert!(!root.join("public/index.html").exists());
}

#[test]
fn a_page_without_a_title_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(root.join("content/broken.md"), "no heading at all").unwrap();

    let result = generate_pages(&root.join("content"), "{{ Content }}", &root.join("public"));
    assert!(matches!(result, Err(BuildError::NoTitle)));
}

#[test]
fn malformed_markdown_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(root.join("content/bad.md"), "# T\n\nunclosed **bold").unwrap();

    let result = generate_pages(&root.join("content"), "{{ Content }}", &root.join("public"));
    assert!(matches!(result, Err(BuildError::Convert(_))));
}
