use slide_impose::*;

#[test]
fn test_stats_default_config() {
    // Default: skip the cover, 3 pages per sheet
    let config = ProcessingConfig::default();
    let stats = calculate_statistics(10, &config).unwrap();

    assert_eq!(stats.source_pages, 10);
    assert_eq!(stats.selected_pages, 9);
    assert_eq!(stats.pages_per_sheet, 3);
    assert_eq!(stats.output_sheets, 3);
    assert_eq!(stats.pages_on_last_sheet, 3);
}

#[test]
fn test_stats_partial_last_sheet() {
    let config = ProcessingConfig {
        skip_first_page: false,
        pages_per_sheet: 4,
        ..Default::default()
    };
    let stats = calculate_statistics(10, &config).unwrap();

    assert_eq!(stats.selected_pages, 10);
    assert_eq!(stats.output_sheets, 3);
    assert_eq!(stats.pages_on_last_sheet, 2);
}

#[test]
fn test_stats_one_per_sheet() {
    let config = ProcessingConfig {
        pages_per_sheet: 1,
        ..Default::default()
    };
    let stats = calculate_statistics(5, &config).unwrap();

    assert_eq!(stats.output_sheets, 4);
    assert_eq!(stats.pages_on_last_sheet, 1);
}

#[test]
fn test_stats_no_pages() {
    let config = ProcessingConfig::default();
    let result = calculate_statistics(1, &config);
    match result {
        Err(ImposeError::EmptyDocument(_)) => {}
        _ => panic!("Expected EmptyDocument error"),
    }
}

#[test]
fn test_stats_invalid_config() {
    let config = ProcessingConfig {
        pages_per_sheet: 0,
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(10, &config),
        Err(ImposeError::Config(_))
    ));
}
