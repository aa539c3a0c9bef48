use insta::assert_snapshot;

use xeq::{
    datetime, insert_many, join, length, member, membership, nonempty, pluck_first, upsert, uri,
    Keyed, Structural,
};

#[derive(Debug, Clone, PartialEq)]
struct Track {
    id: u32,
    title: &'static str,
}

fn track(id: u32, title: &'static str) -> Track {
    Track { id, title }
}

#[test]
fn test_playlist_editing_round() {
    let by_id = Keyed::new(|t: &Track| t.id);
    let playlist = vec![track(1, "intro"), track(2, "verse"), track(3, "outro")];

    // fix a title without moving the track
    let playlist: Vec<Track> = upsert(&by_id, track(2, "chorus"), &playlist).into();
    assert_eq!(playlist[1], track(2, "chorus"));
    assert_eq!(length(&playlist), 3);

    // pull the opening track out
    let (intro, playlist) = pluck_first(|t: &Track| t.id == 1, &playlist);
    assert_eq!(intro, Some(track(1, "intro")));

    // splice two bonus tracks in front of the outro
    let bonus = nonempty![track(4, "solo"), track(5, "reprise")];
    let playlist = insert_many(1, &bonus, &playlist).unwrap();
    let titles: Vec<&str> = playlist.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["chorus", "solo", "reprise", "outro"]);
}

#[test]
fn test_roster_membership() {
    let on_call = ["ada", "brian", "grace"];
    let is_on_call = membership(Structural, &on_call);
    assert!(is_on_call(&"grace"));
    assert!(!is_on_call(&"linus"));
    assert!(member(&Structural, &on_call, &"ada"));
}

#[test]
fn test_schedule_rendering() {
    let slots = ["09:00 standup", "11:00 review", "15:00 retro"];
    assert_snapshot!(join("; ", &slots), @"09:00 standup; 11:00 review; 15:00 retro");
}

#[test]
fn test_event_export_normalizes_to_utc() {
    let starts = [
        datetime::parse_iso("2026-03-01T09:00:00+01:00").unwrap(),
        datetime::parse_iso("2026-03-01T13:30:00Z").unwrap(),
    ];
    let rendered: Vec<String> = starts.iter().map(datetime::to_iso_string).collect();
    assert_snapshot!(
        join(" | ", &rendered),
        @"2026-03-01T08:00:00.000Z | 2026-03-01T13:30:00.000Z"
    );
}

#[test]
fn test_paging_links() {
    let base = uri::parse("https://api.example.com/items?page=1&per_page=50").unwrap();
    let next = uri::with_query_param("page", "2", &base);
    assert_snapshot!(next.as_str(), @"https://api.example.com/items?page=2&per_page=50");
    // the base link is still the first page
    assert_eq!(uri::query_param("page", &base), Some("1".to_string()));
}
