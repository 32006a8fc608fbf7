use super::catalog::ServiceOffering;
use super::selection::Selection;

pub const ESTIMATED_TIMELINE: &str = "8 a 12 semanas";

/// Sum of base prices of every catalog entry present in `selection`.
pub fn estimate(selection: &Selection, catalog: &[ServiceOffering]) -> u64 {
    catalog
        .iter()
        .filter(|service| selection.is_selected(service.id))
        .map(|service| service.base_price)
        .sum()
}

/// Formats whole reais the way pt-BR does: `R$ 13.000`.
pub fn format_brl(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::catalog;

    #[test]
    fn empty_selection_costs_nothing() {
        assert_eq!(estimate(&Selection::new(), catalog::list()), 0);
    }

    #[test]
    fn sums_base_prices() {
        let mut selection = Selection::new();
        selection.toggle("web");
        selection.toggle("app");
        assert_eq!(estimate(&selection, catalog::list()), 13000);

        selection.toggle("system");
        assert_eq!(estimate(&selection, catalog::list()), 23000);
    }

    #[test]
    fn adding_services_never_lowers_the_total() {
        let mut selection = Selection::new();
        let mut previous = estimate(&selection, catalog::list());
        for service in catalog::list() {
            selection.toggle(service.id);
            let current = estimate(&selection, catalog::list());
            assert!(current >= previous);
            assert_eq!(current - previous, service.base_price);
            previous = current;
        }
    }

    #[test]
    fn formats_with_pt_br_grouping() {
        assert_eq!(format_brl(0), "R$ 0");
        assert_eq!(format_brl(999), "R$ 999");
        assert_eq!(format_brl(5000), "R$ 5.000");
        assert_eq!(format_brl(13000), "R$ 13.000");
        assert_eq!(format_brl(123456), "R$ 123.456");
        assert_eq!(format_brl(1234567), "R$ 1.234.567");
    }
}
