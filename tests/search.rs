
use mock_launcher::small_catalog;
use unified_control_panel::catalog::Catalog;
use unified_control_panel::search::{search, search_with, SearchOptions, SearchOutcome};

fn names(outcome: &SearchOutcome<'_>) -> Vec<String> {
    outcome.hits().iter().map(|h| h.entry.name.clone()).collect()
}

#[test]
fn empty_query_is_not_a_search() {
    let catalog = Catalog::builtin();
    assert_eq!(search("", &catalog), SearchOutcome::NotASearch);
    assert_eq!(search("   \t", &catalog), SearchOutcome::NotASearch);
    assert!(search("", &catalog).hits().is_empty());
}

#[test]
fn every_hit_contains_the_query() {
    let catalog = Catalog::builtin();
    for q in ["disk", "MANAGE", " set ", "ms-settings", "e"] {
        let outcome = search(q, &catalog);
        let needle = q.trim().to_lowercase();
        assert!(outcome.is_search());
        for hit in outcome.hits() {
            let e = hit.entry;
            assert!(
                e.name.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
                    || e.invocation.contains(&needle),
                "{} does not match {q}",
                e.name
            );
        }
    }
}

#[test]
fn results_follow_registry_order() {
    let catalog = Catalog::builtin();
    let outcome = search("disk", &catalog);
    assert_eq!(
        names(&outcome),
        ["Disk Cleanup", "Disk Cleanup", "Disk Management", "Storage Settings"]
    );
    let ids: Vec<_> = outcome.hits().iter().map(|h| h.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by_key(|id| (id.category, id.entry));
    assert_eq!(ids, sorted);
}

#[test]
fn search_is_deterministic() {
    let catalog = Catalog::builtin();
    assert_eq!(search("set", &catalog), search("set", &catalog));
}

#[test]
fn wifi_matches_only_through_the_invocation() {
    let catalog = Catalog::builtin();
    let with_cmd = search("wifi", &catalog);
    assert_eq!(names(&with_cmd), ["Wi-Fi Settings"]);

    let names_only = search_with(
        "wifi",
        &catalog,
        SearchOptions {
            match_invocation: false,
        },
    );
    assert!(names_only.is_search());
    assert!(names_only.hits().is_empty());
}

#[test]
fn invocation_match_is_case_sensitive() {
    let catalog = Catalog::builtin();
    // the query is lower-cased first, so the raw "shell:AppData" never matches
    let outcome = search("AppData", &catalog);
    assert!(outcome.is_search());
    assert!(outcome.hits().is_empty());
    let outcome = search("shell:", &catalog);
    assert_eq!(outcome.hits().len(), 4);
}

#[test]
fn wifi_in_small_catalog_hits_one_network_entry() {
    let catalog = small_catalog();
    let outcome = search("WiFi", &catalog);
    assert_eq!(outcome.hits().len(), 1);
    let hit = outcome.hits()[0];
    assert_eq!(hit.category.name, "Network");
    assert_eq!(hit.entry.name, "WiFi Settings");
}

#[test]
fn no_match_is_an_empty_search() {
    let catalog = Catalog::builtin();
    let outcome = search("zzzz", &catalog);
    match outcome {
        SearchOutcome::Matches { query, hits } => {
            assert_eq!(query, "zzzz");
            assert!(hits.is_empty());
        }
        SearchOutcome::NotASearch => panic!("expected a search"),
    }
}
