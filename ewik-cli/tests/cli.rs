use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn ewik() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("ewik").expect("ewik binary")
}

fn write_pages(root: &Path, pages: &[(&str, &str)]) -> std::io::Result<()> {
    let pages_dir = root.join("_pages");
    fs::create_dir_all(&pages_dir)?;
    for (name, body) in pages {
        fs::write(pages_dir.join(name), body)?;
    }
    Ok(())
}

#[test]
fn init_creates_wiki_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("wiki");

    ewik()
        .arg("init")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("ewik initialized"));

    for rel in [
        "_config.json",
        "_pages",
        "static/pages",
        "index.html",
        "styles.css",
        "bundle.js",
    ] {
        assert!(root.join(rel).exists(), "missing {rel}");
    }

    let config: Value = serde_json::from_str(&fs::read_to_string(root.join("_config.json"))?)?;
    assert_eq!(config["title"], "Easy Wiki");
    assert_eq!(config["theme-accent"], "#F6C177");
    Ok(())
}

#[test]
fn build_renders_pages_and_bundle() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("_config.json"),
        r##"{"title": "Kitchen Wiki", "theme-primary": "#FF0000"}"##,
    )?;
    write_pages(
        dir.path(),
        &[
            ("sourdough.md", "---\nCategory: baking\n---\n# Starter\n"),
            ("tea-brewing.md", "---\nTitle: Brewing Tea\n---\nSteep it."),
        ],
    )?;

    ewik().arg("build").arg(dir.path()).assert().success();

    let index = fs::read_to_string(dir.path().join("index.html"))?;
    assert!(index.contains("<h1>Kitchen Wiki</h1>"));

    let css = fs::read_to_string(dir.path().join("styles.css"))?;
    assert!(css.contains("--primary: #FF0000;"));

    let page = fs::read_to_string(dir.path().join("static/pages/tea-brewing.html"))?;
    assert!(page.contains("<title>Brewing Tea</title>"));
    assert!(page.contains("<p>Steep it.</p>"));

    let js = fs::read_to_string(dir.path().join("bundle.js"))?;
    assert!(js.contains(
        r#"{"pages":["sourdough","tea-brewing"],"categoryToPages":{"baking":["sourdough"]}}"#
    ));
    Ok(())
}

#[test]
fn build_fails_without_pages_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    ewik()
        .arg("build")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pages"));
    Ok(())
}

#[test]
fn search_prints_titles_in_index_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_pages(
        dir.path(),
        &[("andrew.md", ""), ("andrea.md", ""), ("al.md", "")],
    )?;

    // Sorted discovery inserts al, andrea, andrew; the last match found is
    // listed first.
    let assert = ewik()
        .args(["search", "AN", "--path"])
        .arg(dir.path())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert_eq!(
        stdout,
        "Andrew\tstatic/pages/andrew.html\nAndrea\tstatic/pages/andrea.html\n"
    );
    Ok(())
}

#[test]
fn search_json_matches_substrings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_pages(
        dir.path(),
        &[("bread.md", ""), ("readme.md", ""), ("tea.md", "")],
    )?;

    let assert = ewik()
        .args(["search", "read", "--json", "--path"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let arr = value.as_array().expect("json array");
    let mut ids: Vec<_> = arr.iter().filter_map(|h| h["id"].as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["bread", "readme"]);
    Ok(())
}

#[test]
fn search_reports_no_results() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_pages(dir.path(), &[("tea.md", "")])?;

    ewik()
        .args(["search", "zzz", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'zzz'"));
    Ok(())
}
