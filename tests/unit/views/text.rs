use super::*;

#[test]
fn truncate_to_width_does_not_split_utf8() {
    let text = "éé";
    let end = truncate_to_width(text, 1);
    assert_eq!(end, "é".len());
    assert!(text.is_char_boundary(end));
}

#[test]
fn truncate_to_width_counts_wide_chars() {
    assert_eq!(truncate_to_width("文件a", 3), "文".len());
    assert_eq!(truncate_to_width("文件a", 4), "文件".len());
    assert_eq!(truncate_to_width("abc", 0), 0);
}

#[test]
fn ellipsize_keeps_short_titles() {
    assert_eq!(ellipsize("app.tsx", 7), "app.tsx");
    assert_eq!(ellipsize("app.tsx", 20), "app.tsx");
}

#[test]
fn ellipsize_cuts_long_titles() {
    assert_eq!(ellipsize("styles.css", 5), "styl…");
    assert_eq!(ellipsize("styles.css", 1), "…");
    assert_eq!(ellipsize("styles.css", 0), "");
    assert_eq!(ellipsize("文件名", 2), "…");
}

#[test]
fn pad_to_width_counts_display_columns() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("文件", 6), "文件  ");
    assert_eq!(pad_to_width("文件", 3), "文件");
}
