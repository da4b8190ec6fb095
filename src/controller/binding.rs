//! View models the controllers write into, and the seam the UI implements.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardArt {
    Image { src: String },
    /// No custom art; the grid shows a music glyph instead of an image.
    Glyph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub filename: String,
    pub title: String,
    /// Full title, shown on hover when the rendered title is truncated.
    pub tooltip: String,
    pub artist: String,
    pub art: CardArt,
    pub art_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    pub cards: Vec<Card>,
    pub empty_visible: bool,
}

impl GridState {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn show_empty(&mut self) {
        self.empty_visible = true;
    }

    pub fn hide_empty(&mut self) {
        self.empty_visible = false;
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Swaps in a freshly rendered set of cards. A card whose image was
    /// already loaded under the same filename and source stays loaded, since
    /// the browser keeps that node and will not fire `load` for it again.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        let previous = std::mem::take(&mut self.cards);
        for mut card in cards {
            card.art_loaded = previous.iter().any(|old| {
                old.art_loaded && old.filename == card.filename && old.art == card.art
            });
            self.push(card);
        }
    }

    /// Applies the loaded state to an image card. Returns false when the card
    /// is gone (a newer render replaced it) or has no image.
    pub fn mark_art_loaded(&mut self, filename: &str) -> bool {
        match self
            .cards
            .iter_mut()
            .find(|card| card.filename == filename && matches!(card.art, CardArt::Image { .. }))
        {
            Some(card) => {
                card.art_loaded = true;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleIcon {
    #[default]
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusPanel {
    pub text: String,
    pub toggle: ToggleIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// A notice on the board, with an id that survives dismissal of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Bounded list of recent notices; the oldest falls off once it is full.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeBoard {
    entries: Vec<PostedNotice>,
    next_id: u64,
}

impl NoticeBoard {
    pub const CAPACITY: usize = 5;

    pub fn post(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(PostedNotice { id, notice });
        if self.entries.len() > Self::CAPACITY {
            let excess = self.entries.len() - Self::CAPACITY;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[PostedNotice] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the controllers render. Implementations must not hold borrows across
/// calls; controllers call these between awaits.
pub trait ViewBinding {
    fn update_grid(&self, f: impl FnOnce(&mut GridState));

    fn update_status(&self, f: impl FnOnce(&mut StatusPanel));

    fn notify(&self, notice: Notice);
}
