//! crates/arxiv_news_core/src/flags.rs
//!
//! Keyword flagging. A keyword matches when it is a case-insensitive substring
//! of the title, abstract and author names concatenated with no separator.
//!
//! NOTE: because the fields are glued together, a keyword can match across a
//! field boundary (end of the title plus start of the abstract, or two adjacent
//! author names). Existing flag lists rely on this exact behavior, so it is kept.

/// Returns the keywords from `flag_list` that occur in the paper text,
/// in `flag_list` order. Repeated keywords in the list are reported repeatedly.
pub fn match_flags(
    title: &str,
    abstract_text: &str,
    authors: &[String],
    flag_list: &[String],
) -> Vec<String> {
    if flag_list.is_empty() {
        return Vec::new();
    }

    let haystack = searchable_text(title, abstract_text, authors);
    flag_list
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}

fn searchable_text(title: &str, abstract_text: &str, authors: &[String]) -> String {
    let mut text = String::with_capacity(
        title.len() + abstract_text.len() + authors.iter().map(String::len).sum::<usize>(),
    );
    text.push_str(title);
    text.push_str(abstract_text);
    for author in authors {
        text.push_str(author);
    }
    text.to_lowercase()
}
