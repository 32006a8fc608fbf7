/// Icons a service card can carry. Rendered by `components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Monitor,
    Smartphone,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Whole reais, no cents.
    pub base_price: u64,
    pub icon: ServiceIcon,
}

static CATALOG: [ServiceOffering; 3] = [
    ServiceOffering {
        id: "web",
        title: "Desenvolvimento Web",
        description: "Criação de sites institucionais, e-commerces, blogs e outras plataformas web.",
        base_price: 5000,
        icon: ServiceIcon::Monitor,
    },
    ServiceOffering {
        id: "app",
        title: "Desenvolvimento de Apps",
        description: "Desenvolvimento de aplicativos móveis para iOS e Android, com design intuitivo e funcionalidades personalizadas.",
        base_price: 8000,
        icon: ServiceIcon::Smartphone,
    },
    ServiceOffering {
        id: "system",
        title: "Desenvolvimento de Sistemas",
        description: "Sistemas personalizados para automação de processos, gestão empresarial e integração de sistemas.",
        base_price: 10000,
        icon: ServiceIcon::Settings,
    },
];

/// Every service the wizard offers, in display order.
pub fn list() -> &'static [ServiceOffering] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static ServiceOffering> {
    CATALOG.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_non_empty_with_unique_ids() {
        assert!(!list().is_empty());
        let ids: HashSet<&str> = list().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), list().len());
    }

    #[test]
    fn find_returns_known_ids_only() {
        assert_eq!(find("app").map(|s| s.base_price), Some(8000));
        assert_eq!(find("system").map(|s| s.icon), Some(ServiceIcon::Settings));
        assert!(find("design").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn catalog_order_is_web_app_system() {
        let ids: Vec<&str> = list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["web", "app", "system"]);
    }
}
