//! Catalog Filtering
//!
//! Category selection, case-insensitive substring search and the display cap.
//! All functions are total over the in-memory catalog.

use crate::models::{ScamCategory, ScamRecord};

/// Number of results shown before "show more"
pub const DEFAULT_DISPLAY_CAP: usize = 12;

/// Key of the pseudo-category that selects every record
pub const ALL_KEY: &str = "all";

/// Selected category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(&'static str),
}

impl CategoryFilter {
    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_KEY,
            CategoryFilter::Only(id) => id,
        }
    }
}

/// Case-insensitive substring match on title or short description.
/// The query is matched literally; only the empty string matches everything.
pub fn matches_query(scam: &ScamRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    scam.title.to_lowercase().contains(&needle) || scam.short_desc.to_lowercase().contains(&needle)
}

/// Select by category, then keep records matching `query`.
///
/// Order follows declaration order; an unknown category id yields nothing.
pub fn filter_scams<'a>(
    categories: &'a [ScamCategory],
    filter: CategoryFilter,
    query: &str,
) -> Vec<&'a ScamRecord> {
    let source: Vec<&'a ScamRecord> = match filter {
        CategoryFilter::All => categories.iter().flat_map(|cat| cat.scams.iter()).collect(),
        CategoryFilter::Only(id) => categories
            .iter()
            .find(|cat| cat.id == id)
            .map(|cat| cat.scams.iter().collect())
            .unwrap_or_default(),
    };

    source.into_iter().filter(|scam| matches_query(scam, query)).collect()
}

/// How many of `total` results are on screen
pub fn visible_len(total: usize, show_all: bool, cap: usize) -> usize {
    if show_all {
        total
    } else {
        total.min(cap)
    }
}

/// Displayed slice of a filtered result
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub shown: Vec<&'a ScamRecord>,
    pub total: usize,
}

impl<'a> CatalogPage<'a> {
    pub fn new(mut filtered: Vec<&'a ScamRecord>, show_all: bool, cap: usize) -> Self {
        let total = filtered.len();
        filtered.truncate(visible_len(total, show_all, cap));
        Self { shown: filtered, total }
    }

    /// Results hidden behind "show more"
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// One entry of the category tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub count: usize,
}

/// "All" followed by every category, each with its record count
pub fn category_tabs(categories: &'static [ScamCategory]) -> Vec<CategoryTab> {
    let total = categories.iter().map(|cat| cat.scams.len()).sum();
    let mut tabs = vec![CategoryTab {
        filter: CategoryFilter::All,
        label: "All Scams",
        icon: None,
        count: total,
    }];
    tabs.extend(categories.iter().map(|cat| CategoryTab {
        filter: CategoryFilter::Only(cat.id),
        label: cat.name,
        icon: Some(cat.icon),
        count: cat.scams.len(),
    }));
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{all_scams, total_scams, SCAM_CATEGORIES};

    fn ids(records: &[&ScamRecord]) -> Vec<u32> {
        records.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_all_without_query_concatenates_categories() {
        let result = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "");
        let expected: Vec<u32> = SCAM_CATEGORIES
            .iter()
            .flat_map(|cat| cat.scams.iter().map(|s| s.id))
            .collect();
        let sum: usize = SCAM_CATEGORIES.iter().map(|c| c.scams.len()).sum();

        assert_eq!(ids(&result), expected);
        assert_eq!(result.len(), sum);
    }

    #[test]
    fn test_single_category_has_no_leakage() {
        for cat in SCAM_CATEGORIES {
            let result = filter_scams(SCAM_CATEGORIES, CategoryFilter::Only(cat.id), "");
            assert_eq!(result.len(), cat.scams.len());
            assert!(result.iter().all(|s| s.category == cat.id));
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_scams(SCAM_CATEGORIES, CategoryFilter::Only("nope"), "").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_stable() {
        let upper = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "WALLET");
        let lower = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "wallet");
        assert_eq!(ids(&upper), ids(&lower));

        let all = ids(&filter_scams(SCAM_CATEGORIES, CategoryFilter::All, ""));
        let positions: Vec<usize> = ids(&lower)
            .iter()
            .map(|id| all.iter().position(|x| x == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_is_idempotent() {
        let once = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "fake");
        let twice: Vec<&ScamRecord> = once
            .iter()
            .copied()
            .filter(|s| matches_query(s, "fake"))
            .collect();
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let blank = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "   ");
        assert!(blank.iter().all(|s| s.title.contains("   ") || s.short_desc.contains("   ")));
        assert!(blank.len() < total_scams());

        // A leading space must not match a word at the start of the title
        let spaced = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, " scam");
        let literal: Vec<u32> = all_scams()
            .filter(|s| {
                s.title.to_lowercase().contains(" scam")
                    || s.short_desc.to_lowercase().contains(" scam")
            })
            .map(|s| s.id)
            .collect();
        assert_eq!(ids(&spaced), literal);
        assert!(!ids(&spaced).contains(&26));
    }

    #[test]
    fn test_defi_contract_scenario() {
        let result = filter_scams(SCAM_CATEGORIES, CategoryFilter::Only("defi"), "contract");
        assert!(ids(&result).contains(&20));
        assert!(result.iter().all(|s| s.category == "defi"));
        assert!(result.iter().all(|s| s.category != "nft"));
    }

    #[test]
    fn test_seed_scenario() {
        let result = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "seed");
        let found = ids(&result);
        assert!(found.contains(&25));
        assert!(found.contains(&27));
        // Fake Wallet Apps mentions the seed phrase in its short description
        assert!(found.contains(&21));
        assert!(result.iter().all(|s| s.category != "centralized"));
        assert!(result.iter().all(|s| matches_query(s, "seed")));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "zzzz-no-such-scam");
        let page = CatalogPage::new(result, false, DEFAULT_DISPLAY_CAP);
        assert!(page.is_empty());
        assert_eq!(page.hidden(), 0);
    }

    #[test]
    fn test_display_cap() {
        let filtered = filter_scams(SCAM_CATEGORIES, CategoryFilter::All, "");
        let total = filtered.len();

        let capped = CatalogPage::new(filtered.clone(), false, DEFAULT_DISPLAY_CAP);
        assert_eq!(capped.shown.len(), total.min(DEFAULT_DISPLAY_CAP));
        assert_eq!(capped.hidden(), total - DEFAULT_DISPLAY_CAP);

        let expanded = CatalogPage::new(filtered, true, DEFAULT_DISPLAY_CAP);
        assert_eq!(expanded.shown.len(), total);
        assert_eq!(expanded.hidden(), 0);

        let small = filter_scams(SCAM_CATEGORIES, CategoryFilter::Only("keys"), "");
        assert_eq!(CatalogPage::new(small, false, DEFAULT_DISPLAY_CAP).shown.len(), 3);
    }

    #[test]
    fn test_category_tabs() {
        let tabs = category_tabs(SCAM_CATEGORIES);
        assert_eq!(tabs.len(), SCAM_CATEGORIES.len() + 1);
        assert_eq!(tabs[0].filter, CategoryFilter::All);
        assert_eq!(tabs[0].count, tabs[1..].iter().map(|t| t.count).sum::<usize>());
        assert_eq!(tabs[1].filter.key(), "keys");
        assert_eq!(tabs[1].count, 3);
    }
}
