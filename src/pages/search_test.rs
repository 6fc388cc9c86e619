use super::*;

#[test]
fn results_summary_counts_trips() {
    assert_eq!(results_summary(0), "No trips found for this day.");
    assert_eq!(results_summary(1), "1 trip found");
    assert_eq!(results_summary(4), "4 trips found");
}
