/// Outcome of matching one player token against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'a> {
    Exact(&'a str),
    Ambiguous(Vec<&'a str>),
    NoMatch,
}

/// Resolve a possibly-abbreviated token against candidate names.
///
/// Precedence: exact alias hit, then exact candidate name, then
/// case-insensitive prefix. An exact alias wins even when the token would
/// also prefix-match other candidates ("n" means north, never northeast).
/// A multi-word argument arrives as one compound token and is matched
/// against full candidate names, never word-by-word. Ambiguous candidates
/// come back sorted and deduplicated so prompts are reproducible.
pub fn resolve<'a>(token: &str, candidates: &[&'a str], aliases: &[(&str, &'a str)]) -> Match<'a> {
    for &(alias, target) in aliases {
        if alias.eq_ignore_ascii_case(token) {
            return Match::Exact(target);
        }
    }

    for candidate in candidates.iter().copied() {
        if candidate.eq_ignore_ascii_case(token) {
            return Match::Exact(candidate);
        }
    }

    let token_lower = token.to_lowercase();
    let mut matches: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().starts_with(&token_lower))
        .collect();
    matches.sort_unstable();
    matches.dedup();

    match matches.len() {
        0 => Match::NoMatch,
        1 => Match::Exact(matches[0]),
        _ => Match::Ambiguous(matches),
    }
}
