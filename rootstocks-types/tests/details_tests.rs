use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rootstocks_types::{BarDetails, BarDuration, NoteDetails, PackedBar, StockDetails};

// ── StockDetails ─────────────────────────────────────────────────

#[test]
fn stock_details_uses_pascal_case_field_names() {
    let details = StockDetails {
        name: "Apple Inc.".into(),
        cusip: "037833100".into(),
        r3k_rank: 1,
        member_of: vec!["SP500".into()],
        ..StockDetails::default()
    };
    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["Name"], "Apple Inc.");
    assert_eq!(json["CUSIP"], "037833100");
    assert_eq!(json["R3kRank"], 1);
    assert_eq!(json["MemberOf"][0], "SP500");
}

#[test]
fn stock_details_tolerates_unknown_and_missing_fields() {
    let details: StockDetails =
        serde_json::from_str(r#"{"Name":"Acme","Founded":1901}"#).unwrap();
    assert_eq!(details, StockDetails::named("Acme"));
}

#[test]
fn stock_details_reads_null_membership_as_empty() {
    let json = r#"{"Name":"IBM","Sector":"Technology","CUSIP":"","ISIN":"","SEDOL":"","Location":"","Exchange":"NYSE","Currency":"USD","R3kRank":37,"MemberOf":null}"#;
    let details: StockDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.name, "IBM");
    assert_eq!(details.r3k_rank, 37);
    assert_eq!(details.member_of, Vec::<String>::new());
}

#[test]
fn stock_details_reads_membership_list() {
    let details: StockDetails =
        serde_json::from_str(r#"{"Name":"IBM","MemberOf":["DJIA","SP500"]}"#).unwrap();
    assert_eq!(details.member_of, vec!["DJIA", "SP500"]);
}

// ── BarDetails ───────────────────────────────────────────────────

#[test]
fn bar_details_key_fields_are_not_serialized() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let bar = BarDetails::new(BarDuration::Minute, ts, 1.0, 2.0, 0.5, 1.5);
    let json = serde_json::to_value(&bar).unwrap();
    assert!(json.get("Duration").is_none());
    assert!(json.get("Timestamp").is_none());
    assert_eq!(json["Close"], 1.5);

    let back: BarDetails = serde_json::from_value(json).unwrap();
    assert_eq!(back.duration, BarDuration::Day);
    assert_eq!(back.close, 1.5);
}

// ── PackedBar ────────────────────────────────────────────────────

#[test]
fn packed_bar_builders() {
    let ts = Utc.timestamp_opt(60, 0).unwrap();
    let bar = PackedBar::new(BarDuration::Day, ts, 1.0, 1.0, 1.0, 1.0)
        .with_volume(500)
        .with_status(3);
    assert_eq!(bar.volume, 500);
    assert_eq!(bar.status, 3);
}

// ── NoteDetails ──────────────────────────────────────────────────

#[test]
fn note_details_new() {
    let ts = Utc.timestamp_opt(10, 0).unwrap();
    let note = NoteDetails::new(ts, "earnings beat");
    assert_eq!(note.timestamp, ts);
    assert_eq!(note.note, "earnings beat");
}
