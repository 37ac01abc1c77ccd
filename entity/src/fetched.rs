/// Load state of a relationship on a [`Record`](crate::club_admin::Record).
///
/// Only the data-access layer moves a relationship to `Loaded`. Serialization
/// reads the tag and never fetches anything on its own, so an `Unloaded`
/// relationship is simply left out of the output.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fetched<T> {
    #[default]
    Unloaded,
    Loaded(T),
}

impl<T> Fetched<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Fetched::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetched::Loaded(value) => Some(value),
            Fetched::Unloaded => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetched::Loaded(value) => Some(value),
            Fetched::Unloaded => None,
        }
    }

    pub fn into_loaded(self) -> Option<T> {
        match self {
            Fetched::Loaded(value) => Some(value),
            Fetched::Unloaded => None,
        }
    }
}

impl<T> From<T> for Fetched<T> {
    fn from(value: T) -> Self {
        Fetched::Loaded(value)
    }
}
