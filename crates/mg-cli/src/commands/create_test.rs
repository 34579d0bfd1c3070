use super::*;
use std::path::Path;
use tempfile::tempdir;

fn global_for(dir: &Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        database: ":memory:".to_string(),
        migrations_dir: dir.join("migrations"),
        log_file: dir.join("logs").join("migrate.log"),
    }
}

#[tokio::test]
async fn create_scaffolds_pair_creating_the_directory() {
    let dir = tempdir().unwrap();
    let global = global_for(dir.path());
    assert!(!global.migrations_dir.exists());

    let args = CreateArgs {
        name: "foo".to_string(),
    };
    execute(&args, &global).await.unwrap();

    let mut names: Vec<String> = std::fs::read_dir(&global.migrations_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("_foo.down.sql"), "got {:?}", names);
    assert!(names[1].ends_with("_foo.up.sql"), "got {:?}", names);
}
