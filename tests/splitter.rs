use anyhow::Result;
use csvmerge::testing::*;
use csvmerge::{CategoryLabel, CsvMergeError, Header, SplitOptions, chunk_ranges, split, split_into_files};
use std::fs;
use std::num::NonZeroUsize;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn rows(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("x{i},{i}")).collect()
}

#[test]
fn chunk_ranges_cover_input_with_short_last_chunk() {
    assert_eq!(chunk_ranges(5, size(2)), vec![(0, 2), (2, 4), (4, 5)]);
    assert_eq!(chunk_ranges(4, size(2)), vec![(0, 2), (2, 4)]);
    assert_eq!(chunk_ranges(3, size(10)), vec![(0, 3)]);
    assert!(chunk_ranges(0, size(3)).is_empty());
}

#[test]
fn split_without_label_writes_rows_verbatim() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let header = Header::parse("k,v");
    let data = rows(5);
    let options = SplitOptions::new(size(2), "Part");

    let files = split_into_files(&header, &data, &options, dir.path())?;
    assert_eq!(files.len(), 3);
    assert_eq!(
        file_names(dir.path())?,
        vec!["Part1.csv", "Part2.csv", "Part3.csv"]
    );

    let mut chunks = Vec::new();
    for (i, path) in files.iter().enumerate() {
        let (h, r) = read_output(path)?;
        assert_eq!(h, "k,v");
        assert_eq!(r.len(), if i < 2 { 2 } else { 1 });
        chunks.push(r);
    }
    assert_partition_of(&chunks, &data);

    let text = fs::read_to_string(&files[2])?;
    assert_eq!(text, "k,v\nx5,5\n");
    Ok(())
}

#[test]
fn split_with_label_appends_category_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let header = Header::parse("k,v");
    let data = rows(5);
    let options = SplitOptions::new(size(2), "Out").with_label(CategoryLabel::parse("A7")?);

    let files = split_into_files(&header, &data, &options, dir.path())?;
    let mut chunks = Vec::new();
    for (i, path) in files.iter().enumerate() {
        let (h, r) = read_output(path)?;
        assert_eq!(h, "k,v,Category");
        let expected_label = format!("A{}", 7 + i);
        let mut stripped = Vec::new();
        for row in &r {
            let (original, label) = split_label(row);
            assert_eq!(label, expected_label);
            stripped.push(original.to_string());
        }
        chunks.push(stripped);
    }
    assert_partition_of(&chunks, &data);
    Ok(())
}

#[test]
fn split_of_no_rows_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data: Vec<String> = Vec::new();
    let n = split(&Header::parse("k"), &data, &SplitOptions::new(size(3), "P"), dir.path())?;
    assert_eq!(n, 0);
    assert!(file_names(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn split_overwrites_same_named_files_only() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("P1.csv"), "stale\n")?;
    fs::write(dir.path().join("keep.txt"), "untouched\n")?;

    let n = split(&Header::parse("k,v"), &rows(1), &SplitOptions::new(size(3), "P"), dir.path())?;
    assert_eq!(n, 1);
    assert_eq!(fs::read_to_string(dir.path().join("P1.csv"))?, "k,v\nx1,1\n");
    assert_eq!(fs::read_to_string(dir.path().join("keep.txt"))?, "untouched\n");
    Ok(())
}

#[test]
fn split_into_missing_directory_is_an_io_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope");
    let err = split(&Header::parse("k,v"), &rows(2), &SplitOptions::new(size(1), "P"), &missing)
        .unwrap_err();
    assert!(matches!(err, CsvMergeError::Io { .. }));
    assert_eq!(err.path(), Some(missing.join("P1.csv").as_path()));
    Ok(())
}

#[test]
fn overflowing_category_number_writes_no_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let label = CategoryLabel {
        prefix: "G".into(),
        start: u64::MAX,
    };
    let options = SplitOptions::new(size(1), "P").with_label(label);

    let err = split(&Header::parse("k,v"), &rows(2), &options, dir.path()).unwrap_err();
    assert!(matches!(err, CsvMergeError::Config(_)));
    assert!(file_names(dir.path())?.is_empty());
    Ok(())
}
