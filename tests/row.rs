use csvmerge::Header;
use csvmerge::row::{cmp_first_field, field_count, first_field, normalize_row};
use std::cmp::Ordering;

#[test]
fn field_count_keeps_trailing_empty_fields() {
    assert_eq!(field_count("a,b,c"), 3);
    assert_eq!(field_count("a,b,"), 3);
    assert_eq!(field_count(",,"), 3);
    assert_eq!(field_count("solo"), 1);
}

#[test]
fn first_field_is_text_before_first_comma() {
    assert_eq!(first_field("Bob,30"), "Bob");
    assert_eq!(first_field(",30"), "");
    assert_eq!(first_field("nocomma"), "nocomma");
}

#[test]
fn normalize_row_trims_and_drops_blank_lines() {
    assert_eq!(normalize_row("  Bob,30 \t"), Some("Bob,30"));
    assert_eq!(normalize_row("   "), None);
    assert_eq!(normalize_row(""), None);
}

#[test]
fn first_field_comparison_ignores_case() {
    assert_eq!(cmp_first_field("apple,1", "APPLE,2"), Ordering::Equal);
    assert_eq!(cmp_first_field("apple,1", "Banana,0"), Ordering::Less);
}

#[test]
fn header_parse_strips_bom_and_whitespace() {
    let h = Header::parse("\u{FEFF}  Name,Age  ");
    assert_eq!(h.as_str(), "Name,Age");
    assert_eq!(h.column_count(), 2);
    assert_eq!(h.with_column("Category"), "Name,Age,Category");
}

#[test]
fn header_compatibility_is_case_and_space_insensitive() {
    let base = Header::parse("Name, Age,City");
    let other = Header::parse(" name ,AGE, city ");
    assert!(base.check_compatible(&other).is_ok());
}

#[test]
fn header_compatibility_reports_first_mismatch() {
    let base = Header::parse("Name,Age,City");
    let other = Header::parse("name,Age,Town");
    let m = base.check_compatible(&other).unwrap_err();
    assert_eq!(m.column, 3);
    assert_eq!(m.expected, "City");
    assert_eq!(m.found, "Town");
}

#[test]
fn header_compatibility_only_checks_five_shared_columns() {
    let base = Header::parse("a,b,c,d,e,f");
    assert!(base.check_compatible(&Header::parse("a,b,c,d,e,X")).is_ok());
    assert!(base.check_compatible(&Header::parse("a,b")).is_ok());
    assert!(base.check_compatible(&Header::parse("a,b,c,d,e,f,g,h")).is_ok());
    assert!(base.check_compatible(&Header::parse("a,b,c,d,Z")).is_err());
}
