use crate::operation::Selection;
use indexmap::IndexSet;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSet {
    pub(crate) possible_types: IndexSet<String>,
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Names of every fragment spread anywhere within this selection set
    /// (including nested selection sets), in document order of first
    /// occurrence.
    pub fn fragment_spread_names(&self) -> IndexSet<&str> {
        let mut names = IndexSet::new();
        self.collect_fragment_spread_names(&mut names);
        names
    }

    fn collect_fragment_spread_names<'a>(&'a self, names: &mut IndexSet<&'a str>) {
        for selection in &self.selections {
            if let Some(fragment_name) = selection.fragment_name() {
                names.insert(fragment_name);
            }
            if let Some(selection_set) = selection.selection_set() {
                selection_set.collect_fragment_spread_names(names);
            }
        }
    }

    /// The concrete schema types the enclosing selection may resolve to, in
    /// document order.
    pub fn possible_types(&self) -> &IndexSet<String> {
        &self.possible_types
    }

    /// The selections in document order. Duplicate response keys are kept
    /// as they appear in the payload.
    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}

/// `possibleTypes` compare in order; `IndexSet`'s own equality does not.
impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.possible_types.iter().eq(other.possible_types.iter())
            && self.selections == other.selections
    }
}
