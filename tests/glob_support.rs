use anyhow::Result;
use csvmerge::io::list_csv_files;
use csvmerge::testing::write_fixture;
use std::fs::create_dir_all;
use tempfile::TempDir;

#[test]
fn lists_only_csv_files_in_sorted_order() -> Result<()> {
    let dir = TempDir::new()?;
    let base = dir.path();
    write_fixture(base, "b.csv", &["h"])?;
    write_fixture(base, "a.csv", &["h"])?;
    write_fixture(base, "notes.txt", &["h"])?;
    create_dir_all(base.join("nested.csv"))?;
    create_dir_all(base.join("sub"))?;
    write_fixture(base.join("sub"), "c.csv", &["h"])?;

    let files = list_csv_files(base)?;
    assert_eq!(files, vec![base.join("a.csv"), base.join("b.csv")]);
    Ok(())
}

#[test]
fn empty_directory_yields_no_files() -> Result<()> {
    let dir = TempDir::new()?;
    assert!(list_csv_files(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn glob_metacharacters_in_directory_name_are_literal() -> Result<()> {
    let dir = TempDir::new()?;
    let odd = dir.path().join("in [2024]*");
    create_dir_all(&odd)?;
    write_fixture(&odd, "x.csv", &["h"])?;

    let files = list_csv_files(&odd)?;
    assert_eq!(files, vec![odd.join("x.csv")]);
    Ok(())
}
