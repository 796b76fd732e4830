use serde::{Deserialize, Serialize};

use crate::round::{Match, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Game,
    Statistics,
}

/// Which panel the scorer is looking at. Persisted alongside the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub show_statistics: bool,
    pub current_team: Side,
    pub current_page: Page,
}

impl ViewState {
    pub fn show_statistics(&mut self) {
        self.show_statistics = true;
        self.current_page = Page::Statistics;
    }

    pub fn back_to_game(&mut self) {
        self.show_statistics = false;
        self.current_page = Page::Game;
    }

    pub fn switch_team(&mut self, side: Side) {
        self.current_team = side;
    }

    /// Panels are read-only while statistics are shown.
    pub fn is_read_only(&self) -> bool {
        self.current_page == Page::Statistics
    }
}

/// Everything a scoring session persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub game: Match,
    pub view: ViewState,
}
