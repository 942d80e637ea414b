use ratatui::widgets::TableState;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::dog::{Dog, DogId};
use crate::domain::input::InputState;
use crate::ui::state::app_mode::AppMode;

pub mod dog_list;

pub use dog_list::{DogCounts, DogList, DogListError, SEED_DOGS};

/// Whole-screen state handed by `&mut` to every event handler.
pub struct App {
    pub dogs: DogList,
    pub input: InputState,
    pub mode: AppMode,
    pub table_state: TableState,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let dogs = if config.seed_sample_dogs {
            DogList::seeded()
        } else {
            DogList::new()
        };
        info!(dogs = dogs.dogs().len(), "starting dog list");

        Self::with_dogs(dogs)
    }

    pub fn with_dogs(dogs: DogList) -> Self {
        let mut table_state = TableState::default();
        if !dogs.visible().is_empty() {
            table_state.select(Some(0));
        }

        Self {
            dogs,
            input: InputState::new(),
            mode: AppMode::List,
            table_state,
        }
    }

    /// Rows currently on screen.
    pub fn visible_dogs(&self) -> Vec<&Dog> {
        self.dogs.visible()
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        let index = self.table_state.selected()?;

        self.dogs.visible().get(index).copied()
    }

    pub fn selected_dog_id(&self) -> Option<DogId> {
        self.selected_dog().map(|dog| dog.id)
    }

    /// Runs a search with `text` and resets the selection to the first match.
    pub fn on_search_submit(&mut self, text: &str) {
        self.dogs.search(text);
        self.select_first();
    }

    /// Adds a dog named `text`; on success the shared field is emptied and the
    /// new dog selected.
    ///
    /// Returns whether the dog was added. Rejections stay visible through
    /// [`DogList::error`].
    pub fn on_add_submit(&mut self, text: &str) -> bool {
        let Ok(dog_id) = self.dogs.add(text) else {
            return false;
        };

        self.input.clear();
        self.select_dog(dog_id);

        true
    }

    /// Flips the favorite flag of `dog_id`, keeping it selected.
    pub fn on_favorite_toggle(&mut self, dog_id: DogId) {
        if self.dogs.toggle_favorite(dog_id).is_some() {
            self.select_dog(dog_id);
        }
    }

    pub fn on_delete(&mut self, dog_id: DogId) {
        if self.dogs.delete(dog_id) {
            self.clamp_selection();
        }
    }

    pub fn clear_search(&mut self) {
        let selected = self.selected_dog_id();
        self.dogs.clear_search();
        match selected {
            Some(dog_id) => self.select_dog(dog_id),
            None => self.select_first(),
        }
    }

    pub fn next(&mut self) {
        let len = self.dogs.visible().len();
        if len == 0 {
            self.table_state.select(None);

            return;
        }

        let index = match self.table_state.selected() {
            Some(index) if index + 1 < len => index + 1,
            Some(_) | None => 0,
        };
        self.table_state.select(Some(index));
    }

    pub fn previous(&mut self) {
        let len = self.dogs.visible().len();
        if len == 0 {
            self.table_state.select(None);

            return;
        }

        let index = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        };
        self.table_state.select(Some(index));
    }

    pub fn select_first(&mut self) {
        let selection = (!self.dogs.visible().is_empty()).then_some(0);
        self.table_state.select(selection);
    }

    pub fn select_last(&mut self) {
        let selection = self.dogs.visible().len().checked_sub(1);
        self.table_state.select(selection);
    }

    fn select_dog(&mut self, dog_id: DogId) {
        let index = self
            .dogs
            .visible()
            .iter()
            .position(|dog| dog.id == dog_id);
        match index {
            Some(index) => self.table_state.select(Some(index)),
            None => self.clamp_selection(),
        }
    }

    /// Keeps the selection inside the visible rows after they shrink.
    fn clamp_selection(&mut self) {
        let len = self.dogs.visible().len();
        let selection = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selection);
    }
}
