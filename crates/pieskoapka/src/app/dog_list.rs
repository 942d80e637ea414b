use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::dog::{Dog, DogId};

/// Sample entries every seeded list starts with.
///
/// The repeated name is intentional sample data and is kept as-is even though
/// user input may not introduce duplicates.
pub const SEED_DOGS: &[(&str, usize)] = &[("Donald", 1), ("Pan Punpernikiel", 14)];

/// Rejection reasons for [`DogList::add`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DogListError {
    #[error("\"{name}\" is already on the list")]
    DuplicateName { name: String },
    #[error("Dog name cannot be empty")]
    EmptyName,
}

/// Derived totals shown above the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DogCounts {
    pub total: usize,
    pub favorites: usize,
}

/// Authoritative ordered list of dogs plus transient search and error state.
#[derive(Debug, Default)]
pub struct DogList {
    dogs: Vec<Dog>,
    error: Option<DogListError>,
    next_id: u64,
    search_query: Option<String>,
}

impl DogList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list pre-filled with [`SEED_DOGS`].
    pub fn seeded() -> Self {
        let mut list = Self::new();
        for (name, copies) in SEED_DOGS {
            for _ in 0..*copies {
                list.push((*name).to_string());
            }
        }

        list
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn error(&self) -> Option<&DogListError> {
        self.error.as_ref()
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    pub fn get(&self, id: DogId) -> Option<&Dog> {
        self.dogs.iter().find(|dog| dog.id == id)
    }

    pub fn position(&self, id: DogId) -> Option<usize> {
        self.dogs.iter().position(|dog| dog.id == id)
    }

    /// Appends a dog named `name` after trimming it.
    ///
    /// On success the search and error state are cleared. On failure the
    /// error is also kept as the active error message.
    ///
    /// # Errors
    /// Returns [`DogListError::DuplicateName`] when a dog with the same
    /// case-insensitive name exists, or [`DogListError::EmptyName`] when the
    /// trimmed name is empty.
    pub fn add(&mut self, name: &str) -> Result<DogId, DogListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject(DogListError::EmptyName));
        }
        let existing = self
            .dogs
            .iter()
            .find(|dog| dog.has_name(name))
            .map(|dog| dog.name.clone());
        if let Some(existing) = existing {
            warn!(name, %existing, "rejected duplicate dog name");

            return Err(self.reject(DogListError::DuplicateName { name: existing }));
        }

        let id = self.push(name.to_string());
        self.search_query = None;
        self.error = None;
        debug!(name, %id, total = self.dogs.len(), "added dog");

        Ok(id)
    }

    /// Sets the active search query after trimming it.
    ///
    /// An empty query unsets the search. The list itself is not touched.
    pub fn search(&mut self, query: &str) {
        let query = query.trim();
        self.search_query = (!query.is_empty()).then(|| query.to_string());
        self.error = None;
        let matches = self.search_result().map_or(self.dogs.len(), |dogs| dogs.len());
        debug!(query, matches, "searched dogs");
    }

    pub fn clear_search(&mut self) {
        self.search_query = None;
    }

    /// Dogs matching the active query in list order, or `None` when no query
    /// is set.
    pub fn search_result(&self) -> Option<Vec<&Dog>> {
        let query = self.search_query.as_deref()?;

        Some(
            self.dogs
                .iter()
                .filter(|dog| dog.name_contains(query))
                .collect(),
        )
    }

    /// Rows the UI should show: the search result when a query is set,
    /// otherwise the whole list.
    pub fn visible(&self) -> Vec<&Dog> {
        self.search_result()
            .unwrap_or_else(|| self.dogs.iter().collect())
    }

    /// Flips the favorite flag of `id`, moving it to the top when it becomes
    /// a favorite.
    ///
    /// Returns the new flag, or `None` if `id` is not in the list.
    pub fn toggle_favorite(&mut self, id: DogId) -> Option<bool> {
        let index = self.position(id)?;
        let mut dog = self.dogs.remove(index);
        dog.is_favorite = !dog.is_favorite;
        let is_favorite = dog.is_favorite;
        if is_favorite {
            self.dogs.insert(0, dog);
        } else {
            self.dogs.insert(index, dog);
        }
        debug!(%id, is_favorite, "toggled favorite");

        Some(is_favorite)
    }

    /// Removes `id` from the list. Returns whether anything was removed.
    pub fn delete(&mut self, id: DogId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let dog = self.dogs.remove(index);
        debug!(%id, name = %dog.name, total = self.dogs.len(), "deleted dog");

        true
    }

    pub fn counts(&self) -> DogCounts {
        DogCounts {
            total: self.dogs.len(),
            favorites: self.dogs.iter().filter(|dog| dog.is_favorite).count(),
        }
    }

    fn push(&mut self, name: String) -> DogId {
        let id = DogId::new(self.next_id);
        self.next_id += 1;
        self.dogs.push(Dog::new(id, name));

        id
    }

    fn reject(&mut self, error: DogListError) -> DogListError {
        self.error = Some(error.clone());

        error
    }
}
