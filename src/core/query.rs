//! Vendor filtering and suggestion ranking.
//!
//! Both operations are pure: they borrow the vendor snapshot and return
//! clones of the selected records in a new `Vec`.

use crate::domain::model::{SearchCriteria, Vendor};

fn contains_ci(values: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == wanted)
}

fn any_contains_ci(values: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    values.iter().any(|v| v.to_lowercase().contains(&needle))
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn matches_keywords(vendor: &Vendor, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let text = std::iter::once(&vendor.company_name)
        .chain(vendor.services.iter())
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    keywords.iter().any(|k| text.contains(&k.to_lowercase()))
}

fn matches_any_exact(own: &[String], requested: &[String]) -> bool {
    requested.is_empty() || requested.iter().any(|r| contains_ci(own, r))
}

fn matches_location(actual: &str, wanted: Option<&str>) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => eq_ci(actual, wanted),
        _ => true,
    }
}

fn matches_certifications(vendor: &Vendor, requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    match vendor.certifications.as_deref() {
        Some(certs) if !certs.is_empty() => requested.iter().any(|r| contains_ci(certs, r)),
        _ => false,
    }
}

pub fn matches(vendor: &Vendor, criteria: &SearchCriteria) -> bool {
    matches_keywords(vendor, &criteria.keywords)
        && matches_any_exact(&vendor.services, &criteria.services)
        && matches_location(&vendor.province, criteria.province.as_deref())
        && matches_location(&vendor.city, criteria.city.as_deref())
        && matches_certifications(vendor, &criteria.certifications)
        && matches_any_exact(&vendor.languages, &criteria.languages)
}

/// Vendors passing every non-empty criterion, in input order.
///
/// Within one field the requested values are OR-ed; fields are AND-ed.
/// Services, certifications and languages compare by case-insensitive
/// equality; keywords by substring of the lower-cased name and services.
pub fn search(vendors: &[Vendor], criteria: &SearchCriteria) -> Vec<Vendor> {
    vendors
        .iter()
        .filter(|v| matches(v, criteria))
        .cloned()
        .collect()
}

/// Relevance of `vendor` for a suggestion request.
///
/// Each service contained in any vendor service scores 2. Each keyword
/// scores 1 for the company name and 1 for the services, independently.
/// Unlike `search`, service matching here is by substring.
pub fn score(vendor: &Vendor, keywords: &[String], services: &[String]) -> u32 {
    let mut score = 0;

    for service in services {
        if any_contains_ci(&vendor.services, service) {
            score += 2;
        }
    }

    let name = vendor.company_name.to_lowercase();
    for keyword in keywords {
        if name.contains(&keyword.to_lowercase()) {
            score += 1;
        }
        if any_contains_ci(&vendor.services, keyword) {
            score += 1;
        }
    }

    score
}

/// Top `limit` vendors by descending score. Equal scores keep input order
/// and zero-score vendors are kept when there is room.
pub fn suggest(
    vendors: &[Vendor],
    keywords: &[String],
    services: &[String],
    limit: usize,
) -> Vec<Vendor> {
    let mut scored: Vec<(u32, &Vendor)> = vendors
        .iter()
        .map(|v| (score(v, keywords, services), v))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, v)| v.clone())
        .collect()
}
