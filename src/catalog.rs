//! Built-in playlists shown while not connected to Spotify.

use crate::selection::{Mood, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPlaylist {
    pub name: &'static str,
    pub description: &'static str,
    /// "Title - Artist" entries.
    pub tracks: &'static [&'static str],
    pub duration: &'static str,
}

/// Looks up the built-in playlist for a selection. Total over the whole
/// `TimeOfDay` x `Mood` domain.
pub fn mock_playlist(time: TimeOfDay, mood: Mood) -> &'static MockPlaylist {
    use Mood::*;
    use TimeOfDay::*;

    match (time, mood) {
        (Morning, Sad) => &MORNING_SAD,
        (Morning, Optimistic) => &MORNING_OPTIMISTIC,
        (Morning, Happy) => &MORNING_HAPPY,
        (Afternoon, Sad) => &AFTERNOON_SAD,
        (Afternoon, Optimistic) => &AFTERNOON_OPTIMISTIC,
        (Afternoon, Happy) => &AFTERNOON_HAPPY,
        (Night, Sad) => &NIGHT_SAD,
        (Night, Optimistic) => &NIGHT_OPTIMISTIC,
        (Night, Happy) => &NIGHT_HAPPY,
    }
}

static MORNING_SAD: MockPlaylist = MockPlaylist {
    name: "Gentle Morning Reflection",
    description: "Soft acoustic melodies to ease into the day",
    tracks: &[
        "Holocene - Bon Iver",
        "Mad World - Gary Jules",
        "The Night We Met - Lord Huron",
    ],
    duration: "45 min",
};

static MORNING_OPTIMISTIC: MockPlaylist = MockPlaylist {
    name: "Rise & Shine",
    description: "Uplifting tunes to start your day with purpose",
    tracks: &[
        "Good Morning - Kanye West",
        "Walking on Sunshine - Katrina",
        "Here Comes the Sun - The Beatles",
    ],
    duration: "52 min",
};

static MORNING_HAPPY: MockPlaylist = MockPlaylist {
    name: "Morning Energy Boost",
    description: "High-energy tracks to jumpstart your day",
    tracks: &[
        "Happy - Pharrell Williams",
        "Can't Stop the Feeling - Justin Timberlake",
        "Good as Hell - Lizzo",
    ],
    duration: "38 min",
};

static AFTERNOON_SAD: MockPlaylist = MockPlaylist {
    name: "Midday Contemplation",
    description: "Thoughtful tracks for afternoon reflection",
    tracks: &[
        "Breathe Me - Sia",
        "Hide and Seek - Imogen Heap",
        "Skinny Love - Bon Iver",
    ],
    duration: "41 min",
};

static AFTERNOON_OPTIMISTIC: MockPlaylist = MockPlaylist {
    name: "Afternoon Motivation",
    description: "Keep your momentum going strong",
    tracks: &[
        "Stronger - Kelly Clarkson",
        "Count on Me - Bruno Mars",
        "Unstoppable - Sia",
    ],
    duration: "49 min",
};

static AFTERNOON_HAPPY: MockPlaylist = MockPlaylist {
    name: "Sunshine Vibes",
    description: "Feel-good hits for the brightest part of your day",
    tracks: &[
        "Uptown Funk - Bruno Mars",
        "Shake It Off - Taylor Swift",
        "Dancing Queen - ABBA",
    ],
    duration: "44 min",
};

static NIGHT_SAD: MockPlaylist = MockPlaylist {
    name: "Evening Solitude",
    description: "Peaceful melodies for quiet contemplation",
    tracks: &[
        "Hurt - Johnny Cash",
        "Black - Pearl Jam",
        "Everybody Hurts - R.E.M.",
    ],
    duration: "47 min",
};

static NIGHT_OPTIMISTIC: MockPlaylist = MockPlaylist {
    name: "Hopeful Nights",
    description: "End your day with hope and gratitude",
    tracks: &[
        "Three Little Birds - Bob Marley",
        "What a Wonderful World - Louis Armstrong",
        "Somewhere Over the Rainbow - Israel Kamakawiwoʻole",
    ],
    duration: "36 min",
};

static NIGHT_HAPPY: MockPlaylist = MockPlaylist {
    name: "Nighttime Celebration",
    description: "Joyful tracks to celebrate the day's end",
    tracks: &[
        "September - Earth Wind & Fire",
        "I Want to Dance with Somebody - Whitney Houston",
        "Mr. Blue Sky - ELO",
    ],
    duration: "42 min",
};
