use crate::DecodeError;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use indexmap::IndexMap;

/// Collects decoded [`Fragment`]s into a [`FragmentRegistry`], rejecting
/// duplicate fragment names.
#[derive(Debug, Default)]
pub(crate) struct FragmentRegistryBuilder {
    fragments: IndexMap<String, Fragment>,
}

impl FragmentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decoded fragment to the registry.
    ///
    /// Returns an error if a fragment with the same name already exists.
    pub fn add_fragment(&mut self, fragment: Fragment) -> Result<(), DecodeError> {
        if let Some(existing) = self.fragments.get(&fragment.name) {
            return Err(DecodeError::DuplicateFragmentName {
                fragment_name: fragment.name,
                first_file_path: existing.file_path.to_owned(),
                second_file_path: fragment.file_path,
            });
        }

        log::trace!(
            "Registered fragment `{}` from `{}`.",
            fragment.name,
            fragment.file_path,
        );
        self.fragments.insert(fragment.name.to_owned(), fragment);
        Ok(())
    }

    pub fn build(self) -> FragmentRegistry {
        FragmentRegistry {
            fragments: self.fragments,
        }
    }
}
