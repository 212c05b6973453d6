use match_physicals::aggregator::PositionFilter;
use match_physicals::catalog::Binning;
use match_physicals::session::Session;
use match_physicals::utils::LoadError;
use std::io::Write;
use tempfile::Builder;

const FIRST: &str = "Date,Position Group,Distance,Minutes\n\
                     2024-01-01,CM,10000,90\n\
                     2024-01-08,RW,11000,90\n";

const SECOND: &str = "Date,Position Group,Distance,Minutes\n\
                      2024-02-01,CM,9000,90\n";

#[test]
fn test_reload_invalidates_derived_values() {
    let mut session = Session::new();
    session.load_csv_text(FIRST, "first.csv").unwrap();

    let before = {
        let (dataset, cache) = session.analysis().unwrap();
        cache.aggregate(dataset, "Distance", &PositionFilter::All)
    };
    assert_eq!(before.mean, 10500.0);

    session.load_csv_text(SECOND, "second.csv").unwrap();
    let after = {
        let (dataset, cache) = session.analysis().unwrap();
        cache.aggregate(dataset, "Distance", &PositionFilter::All)
    };
    assert_eq!(after.mean, 9000.0);
    assert_eq!(after.count, 1);
}

#[test]
fn test_failed_load_commits_nothing() {
    let mut session = Session::new();
    let first_id = session.load_csv_text(FIRST, "first.csv").unwrap().id();

    let result = session.load_csv_text("", "empty.csv");
    assert!(matches!(result, Err(LoadError::MissingHeader)));

    let bad_path = Builder::new().suffix(".txt").tempfile().unwrap();
    assert!(matches!(
        session.load_csv_file(bad_path.path()),
        Err(LoadError::NotCsv(_))
    ));

    assert_eq!(session.dataset().unwrap().id(), first_id);
}

#[test]
fn test_load_csv_file_uses_file_name_as_source() {
    let mut file = Builder::new().prefix("player").suffix(".csv").tempfile().unwrap();
    write!(file, "{}", FIRST).unwrap();

    let mut session = Session::new();
    let dataset = session.load_csv_file(file.path()).unwrap();

    assert!(dataset.source().starts_with("player"));
    assert!(dataset.source().ends_with(".csv"));
    assert_eq!(dataset.len(), 2);
}

#[test]
fn test_selection_does_not_change_cached_values() {
    let mut session = Session::new();
    session.load_csv_text(FIRST, "first.csv").unwrap();
    session.set_position_filter(PositionFilter::Only("RW".into()));

    let (dataset, cache) = session.analysis().unwrap();
    let all = cache.histogram(dataset, "Distance", Binning::new(1000.0, 12000.0), &PositionFilter::All);
    let again = cache.histogram(dataset, "Distance", Binning::new(1000.0, 12000.0), &PositionFilter::All);

    assert_eq!(all, again);
    assert_eq!(all.iter().map(|b| b.count).sum::<usize>(), 2);
    assert_eq!(cache.hits(), 1);
}
