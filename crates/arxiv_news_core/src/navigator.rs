//! crates/arxiv_news_core/src/navigator.rs
//!
//! The two-level browsing cursor: an outer index over categories and an inner
//! index over the papers of the current category.
//!
//! Stepping paper by paper runs off either end of a category into its
//! neighbour (landing on the first paper going forward, the last going back).
//! Explicit category jumps always land on the first paper.
//!
//! A category without papers is still a position, `(c, 0)`, so the user sees
//! that it is empty. Any forward command leaves it.

use crate::domain::{Category, Paper};
use crate::render::Frame;

/// One interpreted line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    NextCategory,
    PreviousCategory,
    Quit,
}

impl Command {
    /// Interprets a line of input. Unrecognized input advances.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "p" => Command::Retreat,
            "nc" => Command::NextCategory,
            "pc" => Command::PreviousCategory,
            "q" => Command::Quit,
            _ => Command::Advance,
        }
    }
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        Command::parse(input)
    }
}

/// `(category index, paper index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub category: usize,
    pub paper: usize,
}

impl Cursor {
    pub const fn new(category: usize, paper: usize) -> Self {
        Self { category, paper }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user asked to quit.
    Quit,
    /// The cursor moved past the last category.
    Exhausted,
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(Cursor),
    Ended(SessionEnd),
}

/// The paper (if any) under the cursor together with its position.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub category: &'a Category,
    pub cursor: Cursor,
    /// `None` when the category has no papers.
    pub paper: Option<&'a Paper>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    At(Cursor),
    Ended(SessionEnd),
}

/// Stateful cursor over the session's categories.
#[derive(Debug, Clone)]
pub struct Navigator {
    categories: Vec<Category>,
    state: State,
}

impl Navigator {
    /// Starts at `(0, 0)`. With no categories at all the session is already exhausted.
    pub fn new(categories: Vec<Category>) -> Self {
        let state = if categories.is_empty() {
            State::Ended(SessionEnd::Exhausted)
        } else {
            State::At(Cursor::new(0, 0))
        };
        Self { categories, state }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current position, or `None` once the session has ended.
    pub fn cursor(&self) -> Option<Cursor> {
        match self.state {
            State::At(cursor) => Some(cursor),
            State::Ended(_) => None,
        }
    }

    pub fn ended(&self) -> Option<SessionEnd> {
        match self.state {
            State::At(_) => None,
            State::Ended(end) => Some(end),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ended().is_some()
    }

    pub fn current(&self) -> Option<Selection<'_>> {
        let cursor = self.cursor()?;
        let category = &self.categories[cursor.category];
        Some(Selection {
            category,
            cursor,
            paper: category.get(cursor.paper),
        })
    }

    /// Renderable view of the current position.
    pub fn frame(&self) -> Option<Frame> {
        self.current().map(Frame::from_selection)
    }

    /// Applies `command` and returns the resulting step. Once ended, the
    /// navigator stays ended and reports the same reason.
    pub fn apply(&mut self, command: Command) -> Step {
        let cursor = match self.state {
            State::At(cursor) => cursor,
            State::Ended(end) => return Step::Ended(end),
        };

        let next = match command {
            Command::Advance => self.advance(cursor),
            Command::Retreat => State::At(self.retreat(cursor)),
            Command::NextCategory => self.next_category(cursor),
            Command::PreviousCategory => {
                State::At(Cursor::new(cursor.category.saturating_sub(1), 0))
            }
            Command::Quit => State::Ended(SessionEnd::Quit),
        };

        self.state = next;
        match next {
            State::At(cursor) => Step::Moved(cursor),
            State::Ended(end) => Step::Ended(end),
        }
    }

    fn size_of(&self, category: usize) -> usize {
        self.categories[category].size()
    }

    fn advance(&self, cursor: Cursor) -> State {
        let paper = cursor.paper + 1;
        if paper < self.size_of(cursor.category) {
            State::At(Cursor::new(cursor.category, paper))
        } else {
            self.next_category(cursor)
        }
    }

    fn retreat(&self, cursor: Cursor) -> Cursor {
        if cursor.paper > 0 {
            return Cursor::new(cursor.category, cursor.paper - 1);
        }
        match cursor.category.checked_sub(1) {
            // An empty previous category lands on its placeholder position.
            Some(previous) => Cursor::new(previous, self.size_of(previous).saturating_sub(1)),
            None => Cursor::new(0, 0),
        }
    }

    fn next_category(&self, cursor: Cursor) -> State {
        let category = cursor.category + 1;
        if category < self.categories.len() {
            State::At(Cursor::new(category, 0))
        } else {
            State::Ended(SessionEnd::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawEntry, RawTag};
    use chrono::{Duration, TimeZone, Utc};

    fn category(name: &str, size: usize) -> Category {
        let base = Utc.with_ymd_and_hms(2018, 3, 24, 0, 0, 0).unwrap();
        let papers = (0..size)
            .map(|i| {
                let published = base - Duration::hours(i as i64);
                crate::domain::Paper::from_entry(
                    RawEntry {
                        title: format!("{name} #{i}"),
                        summary: String::new(),
                        authors: Vec::new(),
                        tags: vec![RawTag {
                            term: name.to_string(),
                            scheme: None,
                        }],
                        id: format!("{name}/{i}"),
                        published,
                        updated: published,
                    },
                    &[],
                )
            })
            .collect();
        Category::new(name, papers)
    }

    fn navigator(sizes: &[usize]) -> Navigator {
        let categories = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| category(&format!("cat{i}"), *size))
            .collect();
        Navigator::new(categories)
    }

    fn at(category: usize, paper: usize) -> Step {
        Step::Moved(Cursor::new(category, paper))
    }

    /// Places the navigator at `target` by stepping forward from the start.
    fn seek(nav: &mut Navigator, target: Cursor) {
        while nav.cursor() != Some(target) {
            assert!(matches!(nav.apply(Command::Advance), Step::Moved(_)), "overshot {target:?}");
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(""), Command::Advance);
        assert_eq!(Command::parse("p"), Command::Retreat);
        assert_eq!(Command::parse("nc"), Command::NextCategory);
        assert_eq!(Command::parse("pc"), Command::PreviousCategory);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("q\n"), Command::Quit);
        assert_eq!(Command::parse("quit"), Command::Advance);
        assert_eq!(Command::parse("P"), Command::Advance);
        assert_eq!(Command::from("whatever"), Command::Advance);
    }

    #[test]
    fn advancing_rolls_into_next_category() {
        let mut nav = navigator(&[2, 3]);
        assert_eq!(nav.cursor(), Some(Cursor::new(0, 0)));

        let trace: Vec<Step> = ["", "", ""].iter().map(|c| nav.apply(Command::parse(c))).collect();

        assert_eq!(trace, [at(0, 1), at(1, 0), at(1, 1)]);
    }

    #[test]
    fn advancing_past_last_paper_exhausts() {
        let mut nav = navigator(&[1, 2]);
        seek(&mut nav, Cursor::new(1, 1));

        assert_eq!(nav.apply(Command::Advance), Step::Ended(SessionEnd::Exhausted));
        assert!(nav.is_finished());
        assert!(nav.current().is_none());
    }

    #[test]
    fn retreat_at_start_is_clamped() {
        let mut nav = navigator(&[2, 3]);
        assert_eq!(nav.apply(Command::Retreat), at(0, 0));
        assert_eq!(nav.apply(Command::PreviousCategory), at(0, 0));
    }

    #[test]
    fn retreat_underflow_lands_on_last_paper_but_previous_category_does_not() {
        let mut nav = navigator(&[3, 2]);
        seek(&mut nav, Cursor::new(1, 0));
        let mut other = nav.clone();

        assert_eq!(nav.apply(Command::Retreat), at(0, 2));
        assert_eq!(other.apply(Command::PreviousCategory), at(0, 0));
    }

    #[test]
    fn previous_category_from_middle_goes_to_first_paper_of_previous() {
        let mut nav = navigator(&[3, 4]);
        seek(&mut nav, Cursor::new(1, 2));
        assert_eq!(nav.apply(Command::PreviousCategory), at(0, 0));
    }

    #[test]
    fn next_category_skips_the_rest() {
        let mut nav = navigator(&[3, 2]);
        nav.apply(Command::Advance);
        assert_eq!(nav.apply(Command::NextCategory), at(1, 0));
        assert_eq!(nav.apply(Command::NextCategory), Step::Ended(SessionEnd::Exhausted));
    }

    #[test]
    fn quit_ends_without_moving_and_stays_ended() {
        let mut nav = navigator(&[2, 3]);
        nav.apply(Command::Advance);

        assert_eq!(nav.apply(Command::Quit), Step::Ended(SessionEnd::Quit));
        assert_eq!(nav.apply(Command::Advance), Step::Ended(SessionEnd::Quit));
        assert_eq!(nav.apply(Command::Retreat), Step::Ended(SessionEnd::Quit));
        assert_eq!(nav.cursor(), None);
    }

    #[test]
    fn empty_category_is_visited_then_left() {
        let mut nav = navigator(&[1, 0, 1]);

        assert_eq!(nav.apply(Command::Advance), at(1, 0));
        let selection = nav.current().unwrap();
        assert_eq!(selection.category.name(), "cat1");
        assert!(selection.paper.is_none());

        assert_eq!(nav.apply(Command::Advance), at(2, 0));
        assert_eq!(nav.apply(Command::Retreat), at(1, 0));
        assert_eq!(nav.apply(Command::Retreat), at(0, 0));
    }

    #[test]
    fn empty_last_category_exhausts_on_advance() {
        let mut nav = navigator(&[0]);
        assert!(nav.current().unwrap().paper.is_none());
        assert_eq!(nav.apply(Command::Advance), Step::Ended(SessionEnd::Exhausted));
    }

    #[test]
    fn no_categories_is_exhausted_from_the_start() {
        let mut nav = navigator(&[]);
        assert_eq!(nav.ended(), Some(SessionEnd::Exhausted));
        assert!(nav.frame().is_none());
        assert_eq!(nav.apply(Command::Advance), Step::Ended(SessionEnd::Exhausted));
    }
}
