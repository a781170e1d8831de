mod common;

use common::{panel_html, FakeEpisode, FakeSeason, FakeSite};
use soundtrack_scraper::{
    EpisodeOutcome, PairingStrategy, ScrapeError, ScraperConfig, ScriptedOperator,
    SoundtrackScraper,
};

fn config() -> ScraperConfig {
    ScraperConfig::new().with_base_url("http://fake.test/show/")
}

fn season(title: &str, episodes: Vec<FakeEpisode>) -> FakeSeason {
    FakeSeason {
        title: title.to_string(),
        episodes,
    }
}

#[test_log::test(tokio::test)]
async fn test_single_season_with_empty_episode() {
    let site = FakeSite::new(vec![season(
        "Season 1",
        vec![
            FakeEpisode::with_tracks("Episode 1", &[("X", "Y")]),
            FakeEpisode::with_tracks("Episode 2", &[]),
        ],
    )]);
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(Vec::<String>::new());

    let run = scraper.run("Example Show", &mut operator).await.unwrap();

    assert_eq!(run.url, "http://fake.test/show/Example-Show");
    assert_eq!(run.playlist.len(), 1);
    assert_eq!(run.playlist.get("X"), Some("Y"));
    assert_eq!(run.summary.scraped(), 2);
    assert!(operator.prompts().is_empty());

    let mut out = Vec::new();
    run.write_report(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "X : Y\nplaylist length: 1\n");

    let log = scraper.page().log();
    assert!(log.consent_dismissed);
    assert!(log.closed);
    assert_eq!(log.back_navigations, 2);
}

#[test_log::test(tokio::test)]
async fn test_broken_episode_is_skipped_and_walk_completes() {
    let site = FakeSite::new(vec![season(
        "Season 1",
        vec![
            FakeEpisode::with_tracks("Pilot", &[("Song A", "Artist A")]),
            FakeEpisode::without_panel("Broken Episode"),
            FakeEpisode::with_tracks("Finale", &[("Song C", "Artist C")]),
        ],
    )])
    .without_consent_popup();
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(Vec::<String>::new());

    let run = scraper.run("Example Show", &mut operator).await.unwrap();

    assert_eq!(run.summary.episodes.len(), 3);
    assert_eq!(run.summary.skipped(), 1);
    let broken = &run.summary.episodes[1];
    assert_eq!(broken.title, "Broken Episode");
    match &broken.outcome {
        EpisodeOutcome::Skipped { reason } => assert!(reason.is_not_found()),
        other => panic!("expected a skipped episode, got {other:?}"),
    }

    let songs: Vec<&str> = run.playlist.iter().map(|e| e.song.as_str()).collect();
    assert_eq!(songs, vec!["Song A", "Song C"]);

    let log = scraper.page().log();
    assert!(!log.consent_dismissed);
    // Only episodes with a panel were read, and every entered episode was left.
    assert_eq!(log.panel_reads, 2);
    assert_eq!(log.back_navigations, 3);
}

#[tokio::test]
async fn test_operator_picks_second_season() {
    let site = FakeSite::new(vec![
        season(
            "Season 1",
            vec![FakeEpisode::with_tracks("S1E1", &[("Old Song", "Old Band")])],
        ),
        season(
            "Season 2",
            vec![
                FakeEpisode::with_tracks("S2E1", &[("New Song", "New Band")]),
                FakeEpisode::with_tracks("S2E2", &[("Another", "Someone")]),
            ],
        ),
    ]);
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(["2"]);

    let run = scraper.run("Example Show", &mut operator).await.unwrap();

    assert_eq!(run.season.index, 1);
    assert_eq!(run.season.title, "Season 2");
    assert_eq!(run.season.available, 2);
    assert_eq!(run.playlist.get("New Song"), Some("New Band"));
    assert_eq!(run.playlist.get("Old Song"), None);
    assert_eq!(run.playlist.len(), 2);
    assert_eq!(operator.prompts().len(), 1);
}

#[tokio::test]
async fn test_invalid_season_ends_run_but_closes_browser() {
    let site = FakeSite::new(vec![
        season("Season 1", vec![FakeEpisode::with_tracks("E1", &[("A", "B")])]),
        season("Season 2", vec![FakeEpisode::with_tracks("E1", &[("C", "D")])]),
    ]);
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(["three"]);

    let err = scraper.run("Example Show", &mut operator).await.unwrap_err();

    assert!(matches!(err, ScrapeError::InvalidSelection(_)));
    let log = scraper.page().log();
    assert!(log.closed);
    assert!(log.activated.is_empty());
}

#[tokio::test]
async fn test_show_without_seasons_is_fatal() {
    let site = FakeSite::new(Vec::new());
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(Vec::<String>::new());

    let err = scraper.run("Unknown Show", &mut operator).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(scraper.page().log().closed);
}

#[tokio::test]
async fn test_repeated_song_keeps_latest_artist() {
    let site = FakeSite::new(vec![season(
        "Season 1",
        vec![
            FakeEpisode::with_tracks("E1", &[("Theme", "Original Cast"), ("Intro", "Band")]),
            FakeEpisode::with_tracks("E2", &[("Theme", "Reprise Cast")]),
        ],
    )]);
    let scraper = SoundtrackScraper::new(site, config()).unwrap();
    let mut operator = ScriptedOperator::new(Vec::<String>::new());

    let run = scraper.run("Example Show", &mut operator).await.unwrap();

    assert_eq!(run.playlist.len(), 2);
    assert_eq!(run.playlist.get("Theme"), Some("Reprise Cast"));
    assert_eq!(run.playlist.iter().next().unwrap().song, "Theme");
}

#[tokio::test]
async fn test_show_all_is_expanded_and_structural_pairing_applies() {
    let misaligned = r#"<div class="sc-hBtRBD iUapDl">
        <div class="ant-row track-row">
            <p class="sc-jEACwC jpIqjk sc-hmdomO YqQqi sc-knuQbY dhEDwX">Unlisted</p>
        </div>
        <div class="ant-row track-row">
            <p class="sc-jEACwC jpIqjk sc-hmdomO YqQqi sc-knuQbY dhEDwX">Credited</p>
            <div class="ant-row sc-ERObt fRngQV">Real Artist</div>
        </div>
    </div>"#;
    let mut episode = FakeEpisode::with_tracks("E1", &[]);
    episode.panel = Some(misaligned.to_string());
    episode.show_all = true;

    let site = FakeSite::new(vec![season("Season 1", vec![episode])]);
    let scraper = SoundtrackScraper::new(
        site,
        config().with_pairing(PairingStrategy::Structural),
    )
    .unwrap();
    let mut operator = ScriptedOperator::new(Vec::<String>::new());

    let run = scraper.run("Example Show", &mut operator).await.unwrap();

    assert_eq!(run.playlist.len(), 1);
    assert_eq!(run.playlist.get("Credited"), Some("Real Artist"));
    assert_eq!(scraper.page().log().expansions, 1);
}

#[test]
fn test_fixture_panel_helper_renders_rows() {
    let html = panel_html(&[("One", "Two")]);
    assert!(html.contains("One"));
    assert!(html.starts_with(r#"<div class="sc-hBtRBD iUapDl">"#));
}
