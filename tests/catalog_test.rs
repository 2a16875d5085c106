use std::collections::HashSet;

use moodflow::catalog::mock_playlist;
use moodflow::display::{PlaylistView, Source};
use moodflow::selection::{Mood, Selection, Theme, TimeOfDay};

#[test]
fn test_mock_playlist_covers_every_selection() {
    let mut names = HashSet::new();

    for time in TimeOfDay::ALL {
        for mood in Mood::ALL {
            let playlist = mock_playlist(time, mood);

            assert!(!playlist.name.is_empty());
            assert!(!playlist.description.is_empty());
            assert_eq!(playlist.tracks.len(), 3);
            assert!(playlist.duration.ends_with(" min"));
            assert!(playlist.tracks.iter().all(|t| t.contains(" - ")));

            names.insert(playlist.name);
        }
    }

    // Every pair has its own playlist
    assert_eq!(names.len(), 9);
}

#[test]
fn test_mock_playlist_known_entries() {
    assert_eq!(mock_playlist(TimeOfDay::Morning, Mood::Optimistic).name, "Rise & Shine");
    assert_eq!(mock_playlist(TimeOfDay::Afternoon, Mood::Happy).name, "Sunshine Vibes");
    assert_eq!(mock_playlist(TimeOfDay::Night, Mood::Sad).name, "Evening Solitude");
}

#[test]
fn test_playlist_view_from_mock() {
    let view = PlaylistView::from(mock_playlist(TimeOfDay::Night, Mood::Happy));

    assert_eq!(view.name, "Nighttime Celebration");
    assert_eq!(view.duration, "42 min");
    assert_eq!(view.source, Source::Catalog);
    assert_eq!(view.tracks[0].title, "September");
    assert_eq!(view.tracks[0].artists, "Earth Wind & Fire");
    assert!(view.tracks.iter().all(|t| t.uri.is_none()));
}

#[test]
fn test_selection_defaults() {
    let selection = Selection::default();
    assert_eq!(selection.time, TimeOfDay::Morning);
    assert_eq!(selection.mood, Mood::Optimistic);
}

#[test]
fn test_selection_query() {
    assert_eq!(Selection::new(TimeOfDay::Morning, Mood::Happy).query(), "happy morning");
    assert_eq!(Selection::new(TimeOfDay::Night, Mood::Sad).query(), "sad night");
}

#[test]
fn test_time_prompts_and_labels() {
    assert_eq!(TimeOfDay::Morning.prompt(), "How do you want to start your day?");
    assert_eq!(TimeOfDay::Afternoon.prompt(), "What energy do you need right now?");
    assert_eq!(TimeOfDay::Night.prompt(), "How should we end your day?");
    assert_eq!(Mood::Sad.label(), "Reflective");
    assert_eq!(Mood::Happy.label(), "Joyful");
}

#[test]
fn test_themes_differ_per_selection() {
    let mut themes = Vec::new();
    for time in TimeOfDay::ALL {
        for mood in Mood::ALL {
            let theme = Theme::for_selection(Selection::new(time, mood));
            assert!(!themes.contains(&theme));
            themes.push(theme);
        }
    }
}
