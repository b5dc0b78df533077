//! Free-text team resolution against the canonical team list.

use crate::data_fetcher::models::Team;

/// Resolves a free-text query to the first matching team in source order.
///
/// The query is lower-cased and trimmed, then candidates are scanned in
/// the order the upstream returned them. A candidate matches when the
/// query is a substring of its full name, city, or short name, or equals
/// its abbreviation exactly. Scanning stops at the first match, so an
/// ambiguous query returns whichever candidate appears earliest; callers
/// must not assume best-match semantics.
pub fn resolve_team<'a>(query: &str, candidates: &'a [Team]) -> Option<&'a Team> {
    let needle = query.trim().to_lowercase();

    candidates.iter().find(|team| {
        let full_name = team.full_name.to_lowercase();
        let abbreviation = team.abbreviation.to_lowercase();
        let city = team.city.to_lowercase();
        let name = team.name.to_lowercase();

        full_name.contains(&needle)
            || abbreviation == needle
            || city.contains(&needle)
            || name.contains(&needle)
    })
}
