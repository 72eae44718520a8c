//! Modal visibility state shared by both forms.

/// Which way a modal is open, if at all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal<K> {
    #[default]
    Closed,
    Create,
    /// Editing the record with this key
    Edit(K),
}

impl<K> Modal<K> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Modal::Edit(_))
    }

    pub fn edit_key(&self) -> Option<&K> {
        match self {
            Modal::Edit(key) => Some(key),
            _ => None,
        }
    }
}
