use std::{
    collections::{BTreeMap, btree_map},
    sync::Arc,
};

use super::{BuildError, ModelKind};

/// A mapping from stable string keys to shared model references.
///
/// Keys iterate in sorted order, so anything printed from a registry is
/// reproducible.
#[derive(Debug)]
pub struct Registry<M: ?Sized> {
    kind: ModelKind,
    entries: BTreeMap<String, Arc<M>>,
}

impl<M: ?Sized> Registry<M> {
    pub(crate) fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Adds `model` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateKey`] if `key` is already taken.
    pub(crate) fn register(
        &mut self,
        key: impl Into<String>,
        model: Arc<M>,
    ) -> Result<(), BuildError> {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Occupied(entry) => Err(BuildError::DuplicateKey {
                kind: self.kind,
                key: entry.key().clone(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(model);
                Ok(())
            }
        }
    }

    /// Puts `model` under `key`, replacing and returning any previous entry.
    pub(crate) fn insert(&mut self, key: impl Into<String>, model: Arc<M>) -> Option<Arc<M>> {
        self.entries.insert(key.into(), model)
    }

    /// Mapping kind this registry holds.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Returns the model registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<M>> {
        self.entries.get(key)
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Arc<M>> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<M>)> {
        self.entries.iter().map(|(key, model)| (key.as_str(), model))
    }
}

/// Cloning a registry shares its models; only the key table is copied.
impl<M: ?Sized> Clone for Registry<M> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut registry = Registry::<str>::new(ModelKind::VerticalProfiles);
        registry.register("a", Arc::from("first")).unwrap();

        let err = registry.register("a", Arc::from("second")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateKey { kind: ModelKind::VerticalProfiles, ref key } if key == "a"
        ));

        assert_eq!(registry.get("a").map(|m| &**m), Some("first"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let mut registry = Registry::<str>::new(ModelKind::VerticalProfiles);
        for key in ["c", "a", "b"] {
            registry.register(key, Arc::from(key)).unwrap();
        }
        assert_eq!(registry.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn clone_shares_models() {
        let mut registry = Registry::<str>::new(ModelKind::VerticalProfiles);
        registry.register("a", Arc::from("x")).unwrap();

        let copy = registry.clone();
        assert!(Arc::ptr_eq(
            registry.get("a").unwrap(),
            copy.get("a").unwrap()
        ));
    }
}
