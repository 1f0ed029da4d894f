pub mod arxiv;
pub mod terminal;

pub use arxiv::ArxivFeedAdapter;
pub use terminal::ConsoleTerminal;
