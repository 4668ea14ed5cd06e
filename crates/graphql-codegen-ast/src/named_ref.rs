use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, a
/// [`FragmentSpreadSelection`](crate::operation::FragmentSpreadSelection)
/// stores a [`FragmentRef`](crate::operation::FragmentRef) naming the spread
/// fragment. The fragment itself lives in the
/// [`FragmentRegistry`](crate::operation::FragmentRegistry) of the
/// [`AstDocument`](crate::AstDocument) being read, so the selection tree never
/// aliases it.
///
/// A `NamedRef` decodes from a plain string.
pub struct NamedRef<TSource, TResource: DerefByName<Source = TSource>> {
    name: String,
    phantom: PhantomData<fn(&TSource) -> &TResource>,
}
impl<TSource, TResource: DerefByName<Source = TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.into(),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> std::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl<'de, TSource, TResource: DerefByName<Source = TSource>> serde::Deserialize<'de> for NamedRef<TSource, TResource> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer)
            .map(Self::new)
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` exists to resolve this reference.")]
    DanglingReference(String),
}
