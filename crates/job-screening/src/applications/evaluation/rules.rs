use std::collections::BTreeSet;

/// Share of the required stack covered by the applicant, as a percentage in `0.0..=100.0`.
///
/// `None` when the applicant listed nothing but blank entries.
pub(crate) fn tech_stack_similarity(required: &[String], offered: &[String]) -> Option<f32> {
    let offered: BTreeSet<String> = offered
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_lowercase)
        .collect();

    if offered.is_empty() {
        return None;
    }

    let required: BTreeSet<String> = required
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_lowercase)
        .collect();

    if required.is_empty() {
        return Some(0.0);
    }

    let matched = required.intersection(&offered).count();
    Some(matched as f32 / required.len() as f32 * 100.0)
}

pub(crate) fn is_home_country(country: &str, home_country: &str) -> bool {
    country.trim().eq_ignore_ascii_case(home_country.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn similarity_ignores_case_whitespace_and_duplicates() {
        let required = stack(&["C#", "RabbitMQ", "Microservice", "Visual Studio"]);
        let offered = stack(&[" c# ", "C#", "rabbitmq", "Go"]);

        assert_eq!(tech_stack_similarity(&required, &offered), Some(50.0));
    }

    #[test]
    fn similarity_is_none_for_blank_entries() {
        let required = stack(&["C#"]);

        assert_eq!(tech_stack_similarity(&required, &stack(&["", "   "])), None);
        assert_eq!(tech_stack_similarity(&required, &[]), None);
    }

    #[test]
    fn home_country_comparison_is_case_insensitive() {
        assert!(is_home_country(" turkey", "TURKEY"));
        assert!(!is_home_country("SPAIN", "TURKEY"));
    }
}
