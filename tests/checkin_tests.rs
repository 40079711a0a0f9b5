use chrono::NaiveTime;
use rollcall::core::{CheckinOutcome, apply_checkin};
use rollcall::errors::AppError;
use rollcall::models::{AttendanceState, AttendeeRecord, Profile, Roster, RosterSchema};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn class_roster() -> Roster {
    Roster::seeded(&["小明", "小華"])
}

#[test]
fn test_first_submission_checks_in_second_checks_out() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = class_roster();

    let first = apply_checkin(&mut roster, &schema, "小明", at(9, 5)).expect("check-in");
    assert_eq!(
        first,
        CheckinOutcome::CheckedIn {
            key: "小明".into(),
            time: "09:05".into()
        }
    );
    let rec = &roster.records[0];
    assert_eq!(rec.check_in.as_deref(), Some("09:05"));
    assert_eq!(rec.check_out, None);
    assert_eq!(rec.score, 0);
    assert_eq!(rec.state(), AttendanceState::CheckedIn);

    let second = apply_checkin(&mut roster, &schema, "小明", at(17, 30)).expect("check-out");
    assert_eq!(
        second,
        CheckinOutcome::CheckedOut {
            key: "小明".into(),
            time: "17:30".into()
        }
    );
    let rec = &roster.records[0];
    assert_eq!(rec.check_in.as_deref(), Some("09:05"));
    assert_eq!(rec.check_out.as_deref(), Some("17:30"));
    assert_eq!(rec.state(), AttendanceState::CheckedOut);

    // the other attendee is untouched
    assert_eq!(roster.records[1], AttendeeRecord::new("小華"));
}

#[test]
fn test_third_submission_is_already_done() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = class_roster();

    apply_checkin(&mut roster, &schema, "小華", at(9, 0)).unwrap();
    apply_checkin(&mut roster, &schema, "小華", at(12, 0)).unwrap();
    let before = roster.clone();

    let third = apply_checkin(&mut roster, &schema, "小華", at(13, 0)).unwrap();
    assert_eq!(third, CheckinOutcome::AlreadyDone { key: "小華".into() });
    assert!(!third.changed());
    assert_eq!(roster, before);
}

#[test]
fn test_unknown_key_leaves_roster_unchanged() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = class_roster();
    let before = roster.clone();

    let outcome = apply_checkin(&mut roster, &schema, "小李", at(9, 0)).unwrap();
    assert_eq!(outcome, CheckinOutcome::NotFound);
    assert_eq!(roster, before);
}

#[test]
fn test_name_lookup_is_exact() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = Roster::seeded(&["Alice"]);

    let outcome = apply_checkin(&mut roster, &schema, "alice", at(9, 0)).unwrap();
    assert_eq!(outcome, CheckinOutcome::NotFound);
}

#[test]
fn test_empty_key_is_rejected() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = class_roster();

    let err = apply_checkin(&mut roster, &schema, "   ", at(9, 0)).unwrap_err();
    assert!(matches!(err, AppError::EmptyKey));
}

#[test]
fn test_offline_profile_matches_email_case_insensitively_and_tags_mode() {
    let schema = RosterSchema::new(Profile::Offline);
    let mut roster = Roster::seeded(&["Amy.Chen@Example.com", "bob@example.com"]);

    let outcome =
        apply_checkin(&mut roster, &schema, "amy.chen@example.com", at(8, 45)).unwrap();
    assert_eq!(
        outcome,
        CheckinOutcome::CheckedIn {
            key: "Amy.Chen@Example.com".into(),
            time: "08:45".into()
        }
    );
    assert_eq!(roster.records[0].mode.as_deref(), Some("OFFLINE"));
}

#[test]
fn test_offline_profile_has_no_checkout() {
    let schema = RosterSchema::new(Profile::Offline);
    let mut roster = Roster::seeded(&["bob@example.com"]);

    apply_checkin(&mut roster, &schema, "bob@example.com", at(8, 0)).unwrap();
    let again = apply_checkin(&mut roster, &schema, "BOB@example.com", at(9, 0)).unwrap();

    assert_eq!(
        again,
        CheckinOutcome::AlreadyDone {
            key: "bob@example.com".into()
        }
    );
    assert_eq!(roster.records[0].check_in.as_deref(), Some("08:00"));
    assert_eq!(roster.records[0].check_out, None);
}

#[test]
fn test_roll_call_profile_does_not_stamp_mode() {
    let schema = RosterSchema::new(Profile::RollCall);
    let mut roster = class_roster();

    apply_checkin(&mut roster, &schema, "小明", at(9, 0)).unwrap();
    assert_eq!(roster.records[0].mode, None);
}
