// End-to-end checks against the catalog that actually ships
use tacotrail_core::{Catalog, FilterCriteria, VenueBrowser};

#[test]
fn builtin_catalog_has_the_taco_week_lineup() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 8);

    let names: Vec<_> = catalog.venues().iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"Taco Mamacita (Northshore)"));
    assert!(names.contains(&"423 Taco"));
}

#[test]
fn search_mamacita_finds_both_locations() {
    let mut browser = VenueBrowser::new(Catalog::builtin().unwrap());
    browser.set_search_text("mamacita");

    let names: Vec<_> = browser.filtered().into_iter().map(|v| v.name).collect();
    assert_eq!(
        names,
        vec![
            "Taco Mamacita (Northshore)",
            "Taco Mamacita (Hamilton Place)"
        ]
    );
}

#[test]
fn search_is_case_insensitive_over_real_data() {
    let mut browser = VenueBrowser::new(Catalog::builtin().unwrap());

    browser.set_search_text("TACO");
    let upper: Vec<_> = browser.filtered().into_iter().map(|v| v.id).collect();

    browser.set_search_text("taco");
    let lower: Vec<_> = browser.filtered().into_iter().map(|v| v.id).collect();

    assert_eq!(upper, lower);
    // every venue whose name or description mentions tacos, in catalog order
    assert!(upper.len() >= 2);
    assert!(upper.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn favorites_only_walkthrough() {
    let mut browser = VenueBrowser::new(Catalog::builtin().unwrap());
    browser.toggle_favorite("2");
    browser.toggle_favorite("4");
    browser.toggle_favorites_only();

    let ids: Vec<_> = browser.filtered().into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["2", "4"]);
}

#[test]
fn dietary_filters_narrow_the_real_catalog() {
    let mut browser = VenueBrowser::new(Catalog::builtin().unwrap());
    browser.toggle_vegetarian();
    let vegetarian_count = browser.filtered().len();
    assert!(vegetarian_count > 0);
    assert!(vegetarian_count < browser.catalog().len());

    browser.toggle_gluten_free();
    let ids: Vec<_> = browser.filtered().into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["1", "8"]);
}

#[test]
fn criteria_identity_returns_whole_catalog() {
    let browser = VenueBrowser::new(Catalog::builtin().unwrap());
    assert!(FilterCriteria::default().is_empty());
    assert_eq!(browser.filtered().len(), browser.catalog().len());
}
