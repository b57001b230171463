//! End-to-end tests for the meeting query and its combination policy.

use meeting_engine::{
    first_fit, query, query_with_mode, CombinationMode, Event, MeetingRequest, TimeRange,
};

fn range(start: i32, end: i32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

// ── Mandatory-only pipeline ──────────────────────────────────────────────────

#[test]
fn single_event_splits_the_day() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request = MeetingRequest::new(["alice"], 30);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(0, 60), range(120, 1440)]);
}

#[test]
fn overlapping_events_merge_before_inversion() {
    let events = vec![
        Event::new("standup", ["alice"], range(60, 120)),
        Event::new("sync", ["alice"], range(90, 150)),
    ];
    let request = MeetingRequest::new(["alice"], 30);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(0, 60), range(150, 1440)]);
}

#[test]
fn duration_longer_than_the_day_never_fits() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request = MeetingRequest::new(["alice"], 1500);

    assert!(query(&events, &request).is_empty());
    assert!(query(&[], &MeetingRequest::new(["alice"], 1500)).is_empty());
}

#[test]
fn unrelated_events_do_not_constrain_the_request() {
    // Bob's calendar is full, but only Alice was asked for.
    let events = vec![Event::new("offsite", ["bob"], TimeRange::WHOLE_DAY)];
    let request = MeetingRequest::new(["alice"], 30);

    assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn busy_intervals_of_all_mandatory_attendees_combine() {
    let events = vec![
        Event::new("standup", ["alice"], range(480, 540)),
        Event::new("review", ["bob"], range(540, 600)),
    ];
    let request = MeetingRequest::new(["alice", "bob"], 60);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(0, 480), range(600, 1440)]);
}

#[test]
fn slots_never_overlap_a_mandatory_attendee_event() {
    // Alice's day-spanning commitment sorts after her two short ones; the
    // merge must still cover the whole [0,200) stretch, leaving only the
    // evening open.
    let events = vec![
        Event::new("standup", ["alice"], range(10, 50)),
        Event::new("sync", ["alice"], range(60, 70)),
        Event::new("workshop", ["alice"], range(0, 200)),
    ];
    let request = MeetingRequest::new(["alice"], 10);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(200, 1440)]);
}

#[test]
fn no_attendees_at_all_yields_the_whole_day() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request = MeetingRequest::new(Vec::<String>::new(), 30);

    assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_attendees_but_oversize_duration_yields_nothing() {
    let request = MeetingRequest::new(Vec::<String>::new(), 1441);
    assert!(query(&[], &request).is_empty());
}

// ── Optional attendees ───────────────────────────────────────────────────────

#[test]
fn empty_mandatory_set_returns_optional_availability() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request =
        MeetingRequest::new(Vec::<String>::new(), 30).with_optional_attendees(["alice"]);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(0, 60), range(120, 1440)]);
}

#[test]
fn fully_booked_optional_attendee_falls_back_to_mandatory_times() {
    // Carol can never make it; her preference must not block the meeting.
    let events = vec![
        Event::new("standup", ["alice"], range(60, 120)),
        Event::new("offsite", ["carol"], TimeRange::WHOLE_DAY),
    ];
    let request = MeetingRequest::new(["alice"], 30).with_optional_attendees(["carol"]);

    let open = query(&events, &request);

    assert_eq!(open, vec![range(0, 60), range(120, 1440)]);
}

#[test]
fn fully_booked_mandatory_attendee_yields_nothing_despite_free_optional() {
    let events = vec![Event::new("offsite", ["alice"], TimeRange::WHOLE_DAY)];
    let request = MeetingRequest::new(["alice"], 30).with_optional_attendees(["bob"]);

    // No mandatory range exists for the optional ranges to pair with, so the
    // pair loop falls through empty.
    assert!(query(&events, &request).is_empty());
    assert!(query_with_mode(&events, &request, CombinationMode::Corrected).is_empty());
}

#[test]
fn compatible_mode_emits_mandatory_range_once_per_paired_optional_range() {
    // Alice (mandatory) busy 05:00-06:00; Bob (optional) busy 01:00-02:00 and
    // 03:00-04:00. Alice's morning range pairs with all three of Bob's free
    // ranges, so it is emitted three times, unintersected.
    let events = vec![
        Event::new("focus", ["alice"], range(300, 360)),
        Event::new("standup", ["bob"], range(60, 120)),
        Event::new("review", ["bob"], range(180, 240)),
    ];
    let request = MeetingRequest::new(["alice"], 30).with_optional_attendees(["bob"]);

    let open = query(&events, &request);

    assert_eq!(
        open,
        vec![range(0, 300), range(0, 300), range(0, 300), range(360, 1440)]
    );
}

#[test]
fn corrected_mode_intersects_and_deduplicates() {
    // Same calendar as the compatible-mode test above.
    let events = vec![
        Event::new("focus", ["alice"], range(300, 360)),
        Event::new("standup", ["bob"], range(60, 120)),
        Event::new("review", ["bob"], range(180, 240)),
    ];
    let request = MeetingRequest::new(["alice"], 30).with_optional_attendees(["bob"]);

    let open = query_with_mode(&events, &request, CombinationMode::Corrected);

    assert_eq!(
        open,
        vec![
            range(0, 60),
            range(120, 180),
            range(240, 300),
            range(360, 1440),
        ]
    );
}

#[test]
fn corrected_mode_falls_back_to_mandatory_when_no_intersection_fits() {
    // Alice is free only in the afternoon, Bob only in the morning; the two
    // halves touch at noon but never overlap.
    let events = vec![
        Event::new("deep work", ["alice"], range(0, 720)),
        Event::new("deep work", ["bob"], range(720, 1440)),
    ];
    let request = MeetingRequest::new(["alice"], 500).with_optional_attendees(["bob"]);

    // The literal pair loop finds no overlap and returns nothing.
    assert!(query(&events, &request).is_empty());

    // The corrected policy prefers a mandatory-only slot over no slot.
    let open = query_with_mode(&events, &request, CombinationMode::Corrected);
    assert_eq!(open, vec![range(720, 1440)]);
}

#[test]
fn attendee_in_both_sets_is_tolerated() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request = MeetingRequest::new(["alice"], 30).with_optional_attendees(["alice"]);

    let open = query(&events, &request);

    // Mandatory and optional availability coincide; every pairing emits the
    // same mandatory ranges.
    assert!(!open.is_empty());
    assert!(open.iter().all(|r| *r == range(0, 60) || *r == range(120, 1440)));
}

// ── Convenience ──────────────────────────────────────────────────────────────

#[test]
fn first_fit_returns_the_earliest_ending_slot() {
    let events = vec![Event::new("standup", ["alice"], range(60, 120))];
    let request = MeetingRequest::new(["alice"], 30);

    assert_eq!(first_fit(&events, &request), Some(range(0, 60)));
}

#[test]
fn first_fit_returns_none_when_nothing_fits() {
    let events = vec![Event::new("offsite", ["alice"], TimeRange::WHOLE_DAY)];
    let request = MeetingRequest::new(["alice"], 30);

    assert_eq!(first_fit(&events, &request), None);
}

// ── Wire shape ───────────────────────────────────────────────────────────────

#[test]
fn events_deserialize_and_results_serialize() {
    // The shape the excluded transport layer would move across its wire.
    let events: Vec<Event> = serde_json::from_str(
        r#"[{"title":"standup","attendees":["alice"],"when":{"start":60,"end":120}}]"#,
    )
    .unwrap();
    let request = MeetingRequest::new(["alice"], 30);

    let open = query(&events, &request);

    let json = serde_json::to_string(&open).unwrap();
    assert_eq!(json, r#"[{"start":0,"end":60},{"start":120,"end":1440}]"#);
}
