use colored::Colorize;

use crate::selection::{Mood, Selection, TimeOfDay};

/// Lists the available choices, marking the given selection.
pub fn options(selection: Selection) {
    println!("{}", "What time is it?".bold());
    for time in TimeOfDay::ALL {
        let marker = if time == selection.time { "●" } else { " " };
        println!(
            "  {} {:<10} {:<10} {}",
            marker.green(),
            time.keyword().bright_blue(),
            time.label(),
            time.description().dimmed()
        );
    }

    println!();
    println!("{}", selection.time.prompt().bold());
    for mood in Mood::ALL {
        let marker = if mood == selection.mood { "●" } else { " " };
        println!(
            "  {} {:<10} {:<10} {}",
            marker.green(),
            mood.keyword().bright_blue(),
            mood.label(),
            mood.description().dimmed()
        );
    }
}
