//! Time-of-day and mood selection.
//!
//! A [`Selection`] is transient: it is built from command-line options for a
//! single invocation and never persisted. It drives both the built-in catalog
//! lookup and the search query sent to Spotify, as well as the colour theme
//! used to render the result.

use std::fmt;

use clap::ValueEnum;
use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Mood {
    Sad,
    #[default]
    Optimistic,
    Happy,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Night];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Start your day right",
            TimeOfDay::Afternoon => "Keep the energy flowing",
            TimeOfDay::Night => "Wind down peacefully",
        }
    }

    /// Question shown above the mood choices.
    pub fn prompt(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "How do you want to start your day?",
            TimeOfDay::Afternoon => "What energy do you need right now?",
            TimeOfDay::Night => "How should we end your day?",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Night => "night",
        }
    }
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Sad, Mood::Optimistic, Mood::Happy];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Sad => "Reflective",
            Mood::Optimistic => "Optimistic",
            Mood::Happy => "Joyful",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Sad => "Gentle, contemplative vibes",
            Mood::Optimistic => "Uplifting and motivating",
            Mood::Happy => "Pure happiness and energy",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Optimistic => "optimistic",
            Mood::Happy => "happy",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub time: TimeOfDay,
    pub mood: Mood,
}

impl Selection {
    pub fn new(time: TimeOfDay, mood: Mood) -> Self {
        Selection { time, mood }
    }

    /// Search query sent to Spotify for this selection, e.g. `"happy morning"`.
    pub fn query(&self) -> String {
        format!("{} {}", self.mood.keyword(), self.time.keyword())
    }

    pub fn theme(&self) -> Theme {
        Theme::for_selection(*self)
    }
}

/// Terminal colours standing in for the per-selection gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub from: Color,
    pub to: Color,
}

impl Theme {
    pub fn for_selection(selection: Selection) -> Self {
        use Mood::*;
        use TimeOfDay::*;

        let (from, to) = match (selection.time, selection.mood) {
            (Morning, Sad) => ((96, 165, 250), (107, 114, 128)),
            (Morning, Optimistic) => ((250, 204, 21), (249, 115, 22)),
            (Morning, Happy) => ((244, 114, 182), (239, 68, 68)),
            (Afternoon, Sad) => ((59, 130, 246), (168, 85, 247)),
            (Afternoon, Optimistic) => ((74, 222, 128), (59, 130, 246)),
            (Afternoon, Happy) => ((250, 204, 21), (236, 72, 153)),
            (Night, Sad) => ((79, 70, 229), (107, 33, 168)),
            (Night, Optimistic) => ((168, 85, 247), (236, 72, 153)),
            (Night, Happy) => ((236, 72, 153), (220, 38, 38)),
        };

        Theme {
            from: Color::TrueColor {
                r: from.0,
                g: from.1,
                b: from.2,
            },
            to: Color::TrueColor {
                r: to.0,
                g: to.1,
                b: to.2,
            },
        }
    }
}
