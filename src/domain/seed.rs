use non_empty_string::NonEmptyString;

use crate::domain::{Post, PostId};

fn text(s: &str) -> NonEmptyString {
    NonEmptyString::new(s.to_string()).expect("seed text is never empty")
}

/// The example posts used when no valid journal exists, or after a reset.
#[must_use]
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::from("seed-2026-01-28"),
            title: text("Planning the week"),
            date: "2026-01-28".to_string(),
            tags: vec!["planning".to_string(), "weekly".to_string()],
            summary: "Priorities and a rough schedule.".to_string(),
            content: text(
                "Blocked out mornings for deep work and kept Friday afternoon free for \
                 catching up. Three priorities: finish the draft, review notes, rest.",
            ),
        },
        Post {
            id: PostId::from("seed-2026-01-27"),
            title: text("First practice session"),
            date: "2026-01-27".to_string(),
            tags: vec!["practice".to_string()],
            summary: "Getting started with a daily habit.".to_string(),
            content: text(
                "Twenty minutes of focused practice. Slow going at first but it got \
                 easier towards the end. Same time tomorrow.",
            ),
        },
    ]
}
