use std::fmt;

const FAVORITE_ICON: &str = "💜";
const NOT_FAVORITE_ICON: &str = "🤍";

/// Opaque row handle allocated by the dog list.
///
/// Names are not unique in seeded data, so the UI addresses rows through this
/// handle instead of by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DogId(u64);

impl DogId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One named entry in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub is_favorite: bool,
}

impl Dog {
    pub(crate) fn new(id: DogId, name: String) -> Self {
        Self {
            id,
            name,
            is_favorite: false,
        }
    }

    /// Returns whether this dog's name equals `name`, ignoring case and
    /// surrounding whitespace.
    pub fn has_name(&self, name: &str) -> bool {
        normalize(&self.name) == normalize(name)
    }

    /// Returns whether this dog's name contains `query`, ignoring case.
    ///
    /// `query` is expected to be trimmed already.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn favorite_icon(&self) -> &'static str {
        if self.is_favorite {
            FAVORITE_ICON
        } else {
            NOT_FAVORITE_ICON
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
