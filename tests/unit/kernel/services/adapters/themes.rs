use super::*;
use crate::kernel::services::testing::block_on;
use crate::kernel::theme::{ThemeBase, THEME_IDS};

#[test]
fn test_every_catalog_theme_parses() {
    for id in THEME_IDS {
        let def = block_on(BundledThemes.load(id)).unwrap();
        assert!(def.color("editor.background").is_some(), "{id}");
        assert!(def.token_foreground("comment").is_some(), "{id}");
    }
}

#[test]
fn test_light_theme_uses_light_base() {
    let def = block_on(BundledThemes.load("github-light")).unwrap();
    assert_eq!(def.base, ThemeBase::Light);
}

#[test]
fn test_unknown_theme_is_not_found() {
    let err = block_on(BundledThemes.load("solarized")).unwrap_err();
    assert!(matches!(err, ThemeError::NotFound(id) if id == "solarized"));
}
