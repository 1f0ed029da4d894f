//! crates/arxiv_news_core/src/render.rs
//!
//! Builds the renderable representation of the current navigator position.
//! Painting it (clearing the screen, colours) is left to the terminal adapter,
//! which gets each line tagged with what it shows.

use std::fmt;

use crate::domain::Paper;
use crate::navigator::Selection;

/// What a rendered line shows, so a terminal can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Border,
    Header,
    Flag,
    Title,
    Authors,
    Date,
    Tags,
    Id,
    Abstract,
    Notice,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Everything shown for one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperFrame {
    pub category: String,
    /// 1-based.
    pub position: usize,
    pub size: usize,
    pub flags: Vec<String>,
    pub title: String,
    pub authors: String,
    pub date: String,
    pub is_new: bool,
    pub tags: String,
    pub id: String,
    pub abstract_text: String,
}

impl PaperFrame {
    fn new(category: &str, position: usize, size: usize, paper: &Paper) -> Self {
        Self {
            category: category.to_string(),
            position,
            size,
            flags: paper.flags().to_vec(),
            title: paper.title().to_string(),
            authors: paper.authors().join(", "),
            date: paper.date().format("%Y-%m-%d").to_string(),
            is_new: paper.is_new(),
            tags: paper.tags().join(" "),
            id: paper.id().to_string(),
            abstract_text: paper.abstract_text().to_string(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.is_new {
            "NEW"
        } else {
            "REVISED"
        }
    }
}

/// A full screen for the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Paper(PaperFrame),
    EmptyCategory { category: String },
}

impl Frame {
    pub fn from_selection(selection: Selection<'_>) -> Self {
        let category = selection.category;
        match selection.paper {
            Some(paper) => Frame::Paper(PaperFrame::new(
                category.name(),
                selection.cursor.paper + 1,
                category.size(),
                paper,
            )),
            None => Frame::EmptyCategory {
                category: category.name().to_string(),
            },
        }
    }

    pub fn lines(&self) -> Vec<Line> {
        match self {
            Frame::Paper(paper) => {
                let header = format!("{}  {}/{}", paper.category, paper.position, paper.size);
                let mut lines = boxed(&header);
                lines.push(Line::blank());

                if !paper.flags.is_empty() {
                    lines.extend(
                        paper
                            .flags
                            .iter()
                            .map(|flag| Line::new(LineKind::Flag, format!(" * {flag}"))),
                    );
                    lines.push(Line::blank());
                }

                lines.push(Line::new(LineKind::Title, paper.title.as_str()));
                lines.push(Line::new(LineKind::Authors, format!("\t{}", paper.authors)));
                lines.push(Line::new(
                    LineKind::Date,
                    format!("\t{} {}", paper.date, paper.status()),
                ));
                lines.push(Line::new(LineKind::Tags, format!("\t{}", paper.tags)));
                lines.push(Line::new(LineKind::Id, format!("\t{}", paper.id)));
                lines.push(Line::new(LineKind::Abstract, paper.abstract_text.as_str()));
                lines
            }
            Frame::EmptyCategory { category } => {
                let mut lines = boxed(&format!("{category}  0/0"));
                lines.push(Line::blank());
                lines.push(Line::new(LineKind::Notice, format!("No new papers in {category}.")));
                lines
            }
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

fn boxed(text: &str) -> Vec<Line> {
    let border = format!("*{}*", "-".repeat(6 + text.chars().count()));
    vec![
        Line::new(LineKind::Border, border.clone()),
        Line::new(LineKind::Header, format!("|   {text}   |")),
        Line::new(LineKind::Border, border),
    ]
}
