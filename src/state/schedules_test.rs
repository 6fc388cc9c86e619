use super::*;

fn valid_draft() -> ScheduleDraft {
    ScheduleDraft {
        departure_time: "08:30".to_owned(),
        days_of_week: vec!["MON".to_owned()],
        active: true,
    }
}

#[test]
fn validate_accepts_complete_draft() {
    assert!(validate_schedule_draft(&valid_draft()).is_ok());
}

#[test]
fn validate_rejects_bad_time_and_empty_days() {
    let mut draft = valid_draft();
    draft.departure_time = "8.30".to_owned();
    assert!(validate_schedule_draft(&draft).is_err());

    let mut draft = valid_draft();
    draft.days_of_week.clear();
    assert_eq!(validate_schedule_draft(&draft), Err("Pick at least one operating day."));
}

#[test]
fn toggle_day_adds_then_removes() {
    let mut draft = valid_draft();
    draft.toggle_day("FRI");
    assert_eq!(draft.days_of_week, vec!["MON".to_owned(), "FRI".to_owned()]);
    draft.toggle_day("MON");
    assert_eq!(draft.days_of_week, vec!["FRI".to_owned()]);
}
