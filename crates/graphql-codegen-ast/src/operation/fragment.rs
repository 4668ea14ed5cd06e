use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;

/// A named, reusable selection set and the source it was defined in.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(rename = "fragmentName")]
    pub(crate) name: String,
    pub(crate) file_path: String,
    pub(crate) source: String,
    pub(crate) selection_set: SelectionSet,
}

impl Fragment {
    /// Path of the file that defines this fragment, as recorded by the tool
    /// that produced the payload (usually a `file://` URL).
    pub fn file_path(&self) -> &str {
        self.file_path.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The raw GraphQL text of the fragment definition.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }
}

impl DerefByName for Fragment {
    type Source = FragmentRegistry;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> std::result::Result<&'a Fragment, DerefByNameError> {
        source.fragments.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type FragmentRef = NamedRef<FragmentRegistry, Fragment>;
