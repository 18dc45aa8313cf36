use crate::parse::SearchResult;
use serde::Serialize;

/// Outcome of looking a domain up in a results list
///
/// `rank == 0` means "not found within the fetched depth". It says nothing
/// about where beyond that depth the domain sits, so callers keep the depth
/// they fetched at alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankMatch {
    pub rank: usize,
    pub matched_result: Option<SearchResult>,
}

impl RankMatch {
    pub fn not_found() -> Self {
        Self {
            rank: 0,
            matched_result: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.rank > 0
    }
}

/// Finds the best (lowest-rank) result linking to the target domain
///
/// Matching is substring containment of the normalised domain in the link,
/// so any page on the host counts. Pure: the same inputs always give the
/// same answer.
///
/// # Arguments
///
/// * `results` - Results in page order
/// * `normalized_domain` - Output of [`normalize_domain`](crate::rank::normalize_domain)
pub fn find_rank(results: &[SearchResult], normalized_domain: &str) -> RankMatch {
    if normalized_domain.is_empty() {
        return RankMatch::not_found();
    }

    results
        .iter()
        .filter(|result| result.link.to_lowercase().contains(normalized_domain))
        .min_by_key(|result| result.rank)
        .map(|result| RankMatch {
            rank: result.rank,
            matched_result: Some(result.clone()),
        })
        .unwrap_or_else(RankMatch::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(links: &[&str]) -> Vec<SearchResult> {
        links
            .iter()
            .enumerate()
            .map(|(i, link)| SearchResult {
                title: format!("Result {}", i + 1),
                link: link.to_string(),
                snippet: String::new(),
                rank: i + 1,
            })
            .collect()
    }

    #[test]
    fn test_find_rank_match() {
        let list = results(&[
            "https://one.com/",
            "https://two.com/",
            "https://example.com/page",
        ]);

        let found = find_rank(&list, "example.com");

        assert_eq!(found.rank, 3);
        assert_eq!(
            found.matched_result.map(|r| r.link),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let list = results(&[
            "https://other.com/",
            "https://www.example.com/a",
            "https://example.com/b",
        ]);

        assert_eq!(find_rank(&list, "example.com").rank, 2);
    }

    #[test]
    fn test_not_found_is_zero() {
        let list = results(&["https://one.com/", "https://two.com/"]);
        let found = find_rank(&list, "example.com");

        assert_eq!(found, RankMatch::not_found());
        assert!(!found.is_found());
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(find_rank(&[], "example.com").rank, 0);
    }

    #[test]
    fn test_empty_domain_never_matches() {
        let list = results(&["https://one.com/"]);
        assert_eq!(find_rank(&list, "").rank, 0);
    }

    #[test]
    fn test_case_insensitive_link() {
        let list = results(&["https://EXAMPLE.com/Page"]);
        assert_eq!(find_rank(&list, "example.com").rank, 1);
    }

    #[test]
    fn test_find_rank_is_idempotent() {
        let list = results(&["https://a.com/", "https://example.com/", "https://example.com/x"]);

        let first = find_rank(&list, "example.com");
        for _ in 0..5 {
            assert_eq!(find_rank(&list, "example.com"), first);
        }
    }
}
