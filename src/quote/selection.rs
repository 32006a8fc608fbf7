use std::collections::BTreeSet;

use log::warn;

use super::catalog::{self, ServiceOffering};

/// Services the visitor has picked. Only ids taken from the catalog are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns whether it is selected afterwards.
    /// Unknown ids leave the selection untouched.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(service) = catalog::find(id) else {
            warn!("Ignoring toggle of unknown service id {:?}", id);
            return false;
        };

        if self.ids.remove(service.id) {
            false
        } else {
            self.ids.insert(service.id);
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected offerings in catalog order.
    pub fn offerings(&self) -> impl Iterator<Item = &'static ServiceOffering> + '_ {
        catalog::list()
            .iter()
            .filter(move |service| self.ids.contains(service.id))
    }

    /// Selected ids in catalog order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.offerings().map(|service| service.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_parity_decides_membership() {
        let mut selection = Selection::new();
        for count in 1..=6 {
            let now_selected = selection.toggle("web");
            assert_eq!(now_selected, count % 2 == 1);
            assert_eq!(selection.is_selected("web"), count % 2 == 1);
        }
    }

    #[test]
    fn double_toggle_restores_previous_selection() {
        let mut selection = Selection::new();
        selection.toggle("app");
        let before = selection.clone();

        selection.toggle("system");
        selection.toggle("system");
        assert_eq!(selection, before);

        selection.toggle("app");
        selection.toggle("app");
        assert_eq!(selection, before);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut selection = Selection::new();
        selection.toggle("web");
        let before = selection.clone();

        assert!(!selection.toggle("blockchain"));
        assert_eq!(selection, before);
        assert!(!selection.is_selected("blockchain"));
    }

    #[test]
    fn ids_follow_catalog_order() {
        let mut selection = Selection::new();
        selection.toggle("system");
        selection.toggle("web");
        selection.toggle("app");
        assert_eq!(selection.ids(), vec!["web", "app", "system"]);
        assert_eq!(selection.len(), 3);
    }
}
