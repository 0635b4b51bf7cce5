use relaylist::wiki::release_urls;

const PAGE: &str = "\
# March Releases

Preamble with a link that must not count: https://open.spotify.com/track/NOTME0

| # | Artist | Release | Link |
|---|---|---|---|
| 1 | Artist A | Single B | https://open.spotify.com/track/AAA111 |
| 2 | Artist C | Album D | https://open.spotify.com/album/BBB222 |
| 3 | Artist E | Album F | streaming link pending |
| 4 | Artist G | Album H | https://play.spotify.com/album/CCC333 |

Footer link that must not count: https://open.spotify.com/track/AFTER0
";

#[test]
fn test_extracts_table_rows_in_document_order() {
    let urls: Vec<String> = release_urls(PAGE).collect();

    assert_eq!(
        urls,
        vec![
            "https://open.spotify.com/track/AAA111",
            "https://open.spotify.com/album/BBB222",
            "https://play.spotify.com/album/CCC333",
        ]
    );
}

#[test]
fn test_preamble_and_footer_links_are_excluded() {
    let urls: Vec<String> = release_urls(PAGE).collect();

    assert!(!urls.iter().any(|u| u.contains("NOTME0")));
    assert!(!urls.iter().any(|u| u.contains("AFTER0")));
}

#[test]
fn test_rows_without_links_are_skipped_without_ending_the_scan() {
    // Row 3 has no link, but row 4's URL still shows up.
    let urls: Vec<String> = release_urls(PAGE).collect();
    assert_eq!(urls.len(), 3);
    assert!(urls[2].contains("CCC333"));
}

#[test]
fn test_crlf_line_endings_are_normalized() {
    let crlf_page = PAGE.replace('\n', "\r\n");
    let urls: Vec<String> = release_urls(&crlf_page).collect();
    assert_eq!(urls.len(), 3);
}

#[test]
fn test_document_without_separator_yields_nothing() {
    let page = "no table here\n| looks like a row | https://open.spotify.com/track/AAA111 |\n";
    assert_eq!(release_urls(page).count(), 0);
}

#[test]
fn test_scan_stops_at_first_non_table_line() {
    let page = "\
| head | head |
|---|---|
| 1 | https://open.spotify.com/track/AAA111 |
done
| 2 | https://open.spotify.com/track/ZZZ999 |
";
    let urls: Vec<String> = release_urls(page).collect();
    assert_eq!(urls, vec!["https://open.spotify.com/track/AAA111"]);
}

#[test]
fn test_track_then_album_scenario() {
    let page = "\
| # | Release |
|---|---|
| 1 | out now https://open.spotify.com/track/AAA111 enjoy |
| 2 | full album https://open.spotify.com/album/BBB222 stream |
";
    let urls: Vec<String> = release_urls(page).collect();
    assert_eq!(
        urls,
        vec![
            "https://open.spotify.com/track/AAA111",
            "https://open.spotify.com/album/BBB222",
        ]
    );
}

#[test]
fn test_sequence_is_consumable_step_by_step() {
    let mut urls = release_urls(PAGE);
    assert_eq!(
        urls.next().as_deref(),
        Some("https://open.spotify.com/track/AAA111")
    );
    assert_eq!(
        urls.next().as_deref(),
        Some("https://open.spotify.com/album/BBB222")
    );
    assert_eq!(
        urls.next().as_deref(),
        Some("https://play.spotify.com/album/CCC333")
    );
    assert_eq!(urls.next(), None);
    assert_eq!(urls.next(), None);
}
