use crate::named_ref::DerefByNameError;
use crate::operation::Fragment;
use crate::operation::FragmentRef;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;

/// A `...FragmentName` spread.
///
/// The payload carries the fragment's selection set already narrowed to this
/// use site, so emitters rarely need the [`Fragment`] itself; it is still
/// reachable by name through [`FragmentSpreadSelection::fragment()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpreadSelection {
    #[serde(rename = "fragmentName")]
    pub(crate) fragment: FragmentRef,
    pub(crate) is_conditional: Option<bool>,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FragmentSpreadSelection {
    /// Look up the spread [`Fragment`] in `registry` (normally
    /// [`AstDocument::fragments()`](crate::AstDocument::fragments)).
    pub fn fragment<'a>(
        &self,
        registry: &'a FragmentRegistry,
    ) -> Result<&'a Fragment, DerefByNameError> {
        self.fragment.deref(registry)
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment.name()
    }

    pub fn is_conditional(&self) -> Option<bool> {
        self.is_conditional
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
