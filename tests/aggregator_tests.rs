use cbdc_tracker_report::aggregator::{
    aggregate, aggregate_cumulative, cumulative_view, full_view, short_view,
};
use cbdc_tracker_report::dataset::{ProjectRecord, Status};

fn record(year: i32, status: &str) -> ProjectRecord {
    ProjectRecord {
        name: String::new(),
        year,
        status: status.to_string(),
        project_type: "Retail".to_string(),
    }
}

fn sample_records() -> Vec<ProjectRecord> {
    vec![
        record(2014, "Research"),
        record(2016, "Research"),
        record(2016, "Pilot"),
        record(2017, "Proof of concept"),
        record(2018, "Cancelled"),
        record(2018, "Cancelled"),
        record(2020, "Launched"),
    ]
}

#[test]
fn test_aggregate_one_entry_per_year_ascending() {
    let yearly = aggregate(&sample_records());

    let years: Vec<i32> = yearly.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![2014, 2016, 2017, 2018, 2020]);
}

#[test]
fn test_status_totals_across_years() {
    let yearly = aggregate(&sample_records());

    for status in Status::ALL {
        let total: u64 = yearly.iter().map(|y| y.count_for(status)).sum();
        let expected = sample_records()
            .iter()
            .filter(|r| r.status == status.data_label())
            .count() as u64;
        assert_eq!(total, expected);
    }
}

#[test]
fn test_cumulative_final_totals_match_record_counts() {
    let records = sample_records();
    let cumulative = aggregate_cumulative(&records);
    let last = cumulative.last().unwrap();

    assert_eq!(last.research, 2);
    assert_eq!(last.pilot, 1);
    assert_eq!(last.proof_of_concept, 1);
    assert_eq!(last.cancelled, 2);
    assert_eq!(last.launched, 1);
}

#[test]
fn test_net_active_goes_negative_on_cancellation_heavy_year() {
    let yearly = aggregate(&sample_records());
    let y2018 = yearly.iter().find(|y| y.year == 2018).unwrap();

    assert_eq!(y2018.net_active, -2);
}

#[test]
fn test_views_do_not_alter_counts() {
    let yearly = aggregate(&sample_records());
    let cumulative = aggregate_cumulative(&sample_records());

    let full = full_view(&yearly, 1900);
    let short = short_view(&yearly, 1900);
    let cum = cumulative_view(&cumulative, 1900);

    assert_eq!(full.len(), yearly.len());
    assert_eq!(short.len(), yearly.len());
    assert_eq!(cum.len(), cumulative.len());

    // Launched column: last in every view
    for (row, counts) in short.rows.iter().zip(&yearly) {
        assert_eq!(*row.last().unwrap(), counts.launched as i64);
    }
    for (row, counts) in cum.rows.iter().zip(&cumulative) {
        assert_eq!(*row.last().unwrap(), counts.launched as i64);
    }
}

#[test]
fn test_view_floor_is_a_presentation_parameter() {
    let yearly = aggregate(&sample_records());

    assert_eq!(full_view(&yearly, 2013).len(), 5);
    assert_eq!(full_view(&yearly, 2017).len(), 3);
    assert_eq!(full_view(&yearly, 2021).len(), 0);
}

#[test]
fn test_empty_records_degrade_gracefully() {
    assert!(aggregate(&[]).is_empty());
    assert!(aggregate_cumulative(&[]).is_empty());
    assert!(full_view(&[], 2013).is_empty());
}
