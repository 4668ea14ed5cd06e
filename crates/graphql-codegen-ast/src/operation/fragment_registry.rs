use crate::operation::Fragment;
use indexmap::IndexMap;

/// The fragments of one [`AstDocument`](crate::AstDocument), keyed by name
/// and kept in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: IndexMap<String, Fragment>,
}

impl FragmentRegistry {
    pub fn fragments(&self) -> &IndexMap<String, Fragment> {
        &self.fragments
    }

    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
