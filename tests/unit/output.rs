use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "spritemot_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn clear_dir_removes_contents_and_tolerates_missing_dirs() {
    let root = temp_dir("clear_dir");
    let nested = root.join("a").join("b");
    make_dir(&nested).unwrap();
    std::fs::write(nested.join("x.txt"), b"x").unwrap();

    clear_dir(&root).unwrap();
    assert!(!root.exists());
    clear_dir(&root).unwrap();
}

#[test]
fn save_json_round_trips_through_serde_json() {
    let root = temp_dir("save_json");
    make_dir(&root).unwrap();
    let path = root.join("doc.json");
    save_json(&path, &serde_json::json!({ "task": "spmot", "N": 1 })).unwrap();

    let back: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(back["task"], "spmot");
    assert_eq!(back["N"], 1);
    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn io_errors_carry_the_path() {
    let root = temp_dir("missing_parent");
    let err = create_file(&root.join("nope").join("f.txt")).unwrap_err();
    assert!(err.to_string().contains("nope"));
}
