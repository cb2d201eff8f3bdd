use anyhow::Result;
use csvmerge::testing::*;
use csvmerge::{CsvMergeError, Merger, shuffle_rows};
use std::path::PathBuf;

fn rows(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn two_file_example_dedupes_in_first_seen_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let files = two_file_example(dir.path())?;

    let result = Merger::with_seed(1).merge(&files)?;
    assert_eq!(result.header().as_str(), "Name,Age");
    assert_eq!(result.unique_rows(), rows(&["Bob,30", "Ann,25", "Cid,40"]));
    assert_eq!(result.duplicates_removed(), 1);
    assert_eq!(result.final_count(), 3);
    assert_same_rows(result.shuffled_rows(), result.unique_rows());
    Ok(())
}

#[test]
fn malformed_and_blank_rows_are_not_counted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file = write_fixture(
        dir.path(),
        "in.csv",
        &["a,b,c", "1,2", "1,2,3", "   ", "1,2,3,4", "1,2,", "1,2,3   ", ""],
    )?;

    let result = Merger::with_seed(3).merge(&[file])?;
    // Four well-formed rows: "1,2,3" twice (once with trailing spaces), "1,2,3,4", "1,2,".
    assert_eq!(result.unique_rows(), rows(&["1,2,3", "1,2,3,4", "1,2,"]));
    assert_eq!(result.duplicates_removed(), 1);
    assert_eq!(result.duplicates_removed() + result.final_count(), 4);
    Ok(())
}

#[test]
fn duplicates_are_literal_text() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file = write_fixture(dir.path(), "in.csv", &["x,y", "1,2", "1, 2", "1,2"])?;

    let result = Merger::with_seed(3).merge(&[file])?;
    assert_eq!(result.unique_rows(), rows(&["1,2", "1, 2"]));
    assert_eq!(result.duplicates_removed(), 1);
    Ok(())
}

#[test]
fn header_mismatch_names_the_offending_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = write_fixture(dir.path(), "a.csv", &["Name,Age,City", "Bob,30,Oslo"])?;
    let b = write_fixture(dir.path(), "b.csv", &["name,Age,Town", "Ann,25,Rome"])?;

    let err = Merger::new().merge(&[a, b.clone()]).unwrap_err();
    match &err {
        CsvMergeError::Validation {
            file,
            column,
            expected,
            found,
        } => {
            assert_eq!(file, &b);
            assert_eq!(*column, 3);
            assert_eq!(expected, "City");
            assert_eq!(found, "Town");
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(err.to_string().contains("b.csv"));
    Ok(())
}

#[test]
fn bom_and_case_differences_in_headers_are_accepted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = write_fixture(dir.path(), "a.csv", &["\u{FEFF}Name,Age", "Bob,30"])?;
    let b = write_fixture(dir.path(), "b.csv", &["\u{FEFF} NAME , age ", "Ann,25"])?;

    let result = Merger::with_seed(9).merge(&[a, b])?;
    assert_eq!(result.header().as_str(), "Name,Age");
    assert_eq!(result.final_count(), 2);
    Ok(())
}

#[test]
fn narrower_later_header_still_uses_base_column_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = write_fixture(dir.path(), "a.csv", &["a,b,c", "1,2,3"])?;
    let b = write_fixture(dir.path(), "b.csv", &["a,b", "4,5", "6,7,8"])?;

    let result = Merger::with_seed(9).merge(&[a, b])?;
    assert_eq!(result.unique_rows(), rows(&["1,2,3", "6,7,8"]));
    assert_eq!(result.duplicates_removed(), 0);
    Ok(())
}

#[test]
fn empty_files_are_skipped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let empty = dir.path().join("0_empty.csv");
    std::fs::write(&empty, "")?;
    let a = write_fixture(dir.path(), "a.csv", &["k,v", "1,2"])?;

    let result = Merger::with_seed(9).merge(&[empty, a])?;
    assert_eq!(result.header().as_str(), "k,v");
    assert_eq!(result.unique_rows(), rows(&["1,2"]));
    Ok(())
}

#[test]
fn no_inputs_give_an_empty_result() -> Result<()> {
    let result = Merger::new().merge::<PathBuf>(&[])?;
    assert_eq!(result.final_count(), 0);
    assert_eq!(result.duplicates_removed(), 0);
    assert!(result.shuffled_rows().is_empty());
    Ok(())
}

#[test]
fn unreadable_file_is_an_io_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = write_fixture(dir.path(), "a.csv", &["k,v", "1,2"])?;
    let missing = dir.path().join("missing.csv");

    let err = Merger::new().merge(&[a, missing.clone()]).unwrap_err();
    assert!(matches!(err, CsvMergeError::Io { .. }));
    assert_eq!(err.path(), Some(missing.as_path()));
    Ok(())
}

#[test]
fn first_failing_file_in_order_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = write_fixture(dir.path(), "a.csv", &["k,v", "1,2"])?;
    let b = write_fixture(dir.path(), "b.csv", &["x,v", "1,2"])?;
    let missing = dir.path().join("c.csv");

    let err = Merger::new().merge(&[a, b.clone(), missing]).unwrap_err();
    assert!(matches!(err, CsvMergeError::Validation { .. }));
    assert_eq!(err.path(), Some(b.as_path()));
    Ok(())
}

#[test]
fn seeded_shuffle_is_reproducible_permutation() {
    let input: Vec<String> = (0..100).map(|i| format!("row{i},{i}")).collect();
    let a = shuffle_rows(&input, Some(42));
    let b = shuffle_rows(&input, Some(42));
    assert_eq!(a, b);
    assert_same_rows(&a, &input);
    assert_ne!(a, input);
}

#[test]
fn merged_counts_add_up_across_many_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut files = Vec::new();
    let mut well_formed = 0usize;
    for f in 0..4 {
        let mut lines = vec!["id,name".to_string()];
        for i in 0..50 {
            // Overlapping id ranges between files produce cross-file duplicates.
            lines.push(format!("{},n{}", f * 25 + i, (f * 25 + i) % 7));
            well_formed += 1;
        }
        lines.push("broken".to_string());
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        files.push(write_fixture(dir.path(), &format!("f{f}.csv"), &refs)?);
    }

    let result = Merger::with_seed(5).merge(&files)?;
    assert_eq!(result.final_count(), 125);
    assert_eq!(result.duplicates_removed() + result.final_count(), well_formed);
    assert_same_rows(result.shuffled_rows(), result.unique_rows());
    Ok(())
}

#[test]
fn carriage_return_only_files_are_split_into_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mac.csv");
    std::fs::write(&path, "Name,Age\rBob,30\rAnn,25\r")?;

    let result = Merger::with_seed(3).merge(&[path])?;
    assert_eq!(result.header().as_str(), "Name,Age");
    assert_eq!(result.unique_rows(), rows(&["Bob,30", "Ann,25"]));
    Ok(())
}

#[test]
fn mixed_line_endings_in_one_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mixed.csv");
    std::fs::write(&path, "k,v\r\n1,a\n2,b\r3,c\r\n\r\n1,a")?;

    let result = Merger::with_seed(3).merge(&[path])?;
    assert_eq!(result.unique_rows(), rows(&["1,a", "2,b", "3,c"]));
    assert_eq!(result.duplicates_removed(), 1);
    Ok(())
}
