use crate::domain::Post;

/// Derive the displayed feed from the collection and a search query.
///
/// Posts are ordered newest first by comparing their `date` strings. This is
/// only a chronological order because dates are zero-padded `YYYY-MM-DD`.
/// Posts sharing a date keep their collection order.
///
/// A blank query returns every post. Otherwise a post is kept when its
/// [haystack](Post::haystack) contains the trimmed query, ignoring case.
#[must_use]
pub fn feed<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sorted;
    }

    sorted
        .into_iter()
        .filter(|post| post.haystack().contains(&needle))
        .collect()
}
