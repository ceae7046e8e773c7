//! Feature registry — an ordered, fixed set of features with bulk dispatch.
//!
//! Membership is decided once when the registry is built. There is no way to
//! add or remove a feature afterwards, and every tick visits the features in
//! the order they were given.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::RegistryError;
use crate::feature::Feature;
use crate::host::GameHost;

/// An ordered collection of features.
pub struct FeatureRegistry {
    /// Features in registration order.
    features: Vec<Box<dyn Feature>>,
}

impl FeatureRegistry {
    /// Build a registry from features in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateFeature`] if two features share a
    /// name.
    pub fn new(features: Vec<Box<dyn Feature>>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(feature.name().to_string()) {
                return Err(RegistryError::DuplicateFeature(feature.name().to_string()));
            }
        }

        let registry = Self { features };
        info!(
            features = registry.len(),
            enabled = registry.enabled_count(),
            "feature registry built"
        );
        Ok(registry)
    }

    /// Run one tick: update every feature exactly once, in registration order.
    pub fn update_all(&mut self, host: &mut dyn GameHost) {
        for feature in &mut self.features {
            debug!(feature = feature.name(), "updating feature");
            feature.update(host);
        }
    }

    /// Returns an iterator over the features in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Feature> {
        self.features.iter().map(AsRef::as_ref)
    }

    /// Feature names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|f| f.name()).collect()
    }

    /// Number of registered features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if no features are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of features enabled in the settings store.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.iter().filter(|f| f.is_enabled()).count()
    }
}

impl std::fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureRegistry")
            .field("features", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use qol_config::{FeatureIdentity, FeatureType};

    use super::*;
    use crate::host::RecordingHost;

    /// Appends its name to a shared log on every update.
    struct Tracer {
        name: &'static str,
        enabled: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FeatureIdentity for Tracer {
        fn name(&self) -> &str {
            self.name
        }

        fn display_name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Records update order."
        }

        fn feature_type(&self) -> FeatureType {
            FeatureType::Client
        }
    }

    impl Feature for Tracer {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn update(&mut self, _host: &mut dyn GameHost) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn tracer(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn Feature> {
        Box::new(Tracer {
            name,
            enabled: name != "B",
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_update_all_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = FeatureRegistry::new(vec![
            tracer("A", &log),
            tracer("B", &log),
            tracer("C", &log),
        ])
        .unwrap();

        registry.update_all(&mut RecordingHost::new());
        assert_eq!(*log.borrow(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_each_feature_updated_once_per_tick() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry =
            FeatureRegistry::new(vec![tracer("A", &log), tracer("B", &log)]).unwrap();
        let mut host = RecordingHost::new();

        registry.update_all(&mut host);
        registry.update_all(&mut host);
        assert_eq!(*log.borrow(), vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn test_disabled_features_still_dispatched() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = FeatureRegistry::new(vec![tracer("B", &log)]).unwrap();
        assert_eq!(registry.enabled_count(), 0);

        registry.update_all(&mut RecordingHost::new());
        assert_eq!(*log.borrow(), vec!["B"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let err = FeatureRegistry::new(vec![tracer("A", &log), tracer("A", &log)]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateFeature(name) if name == "A"));
    }

    #[test]
    fn test_accessors() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = FeatureRegistry::new(vec![tracer("A", &log), tracer("B", &log)]).unwrap();
        assert_eq!(registry.names(), vec!["A", "B"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(registry.enabled_count(), 1);
        assert!(FeatureRegistry::new(Vec::new()).unwrap().is_empty());
    }
}
