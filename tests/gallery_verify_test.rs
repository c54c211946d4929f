use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn gallery_cmd(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gallery-sync");
    cmd.current_dir(root)
        .env("GALLERY_HOME", root)
        .env_remove("GALLERY_CONFIG_PATH")
        .env_remove("GALLERY_INDEX_FILE")
        .env_remove("GALLERY_ASSETS_DIR");
    cmd
}

#[test]
fn verify_accepts_freshly_updated_index() {
    let tmp = tempdir().expect("tempdir");
    let dragons = tmp.path().join("assets/dragons");
    fs::create_dir_all(&dragons).expect("mkdir");
    for name in [
        "20240101_0900_银龙闪电背景_remix_b.png",
        "20240101_0900_银龙闪电背景_remix_a.png",
        "20240202_1015_冰龙喷射寒冰_remix_a.jpg",
        "loose.webp",
    ] {
        fs::write(dragons.join(name), b"img").expect("write image");
    }
    fs::write(tmp.path().join("gallery.json"), "{\"items\": []}\n").expect("write index");

    gallery_cmd(tmp.path())
        .args(["update", "assets/dragons"])
        .assert()
        .success();
    gallery_cmd(tmp.path())
        .args(["update", "assets/dragons"])
        .assert()
        .success();

    gallery_cmd(tmp.path())
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("items=3"))
        .stdout(predicate::str::contains("category.dragons=3"))
        .stdout(predicate::str::contains("verify: ok"));
}

#[test]
fn verify_flags_broken_index() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("gallery.json"),
        r#"{"items": [
            {"id": "dup", "date": "2023-01-01", "title": "a", "src": "x", "thumb": "x", "images": ["x"]},
            {"id": "dup", "date": "2024-01-01", "title": "b", "src": "y", "thumb": "z", "images": ["y"]}
        ]}"#,
    )
    .expect("write index");

    gallery_cmd(tmp.path())
        .arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate id"))
        .stderr(predicate::str::contains("src and thumb differ"))
        .stderr(predicate::str::contains("not sorted newest first"));
}

#[test]
fn verify_requires_index() {
    let tmp = tempdir().expect("tempdir");

    gallery_cmd(tmp.path())
        .arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gallery.json not found"));
}
