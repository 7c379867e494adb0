//! Counterparty search

use super::types::Counterparty;
use super::KNOWN_COUNTERPARTY_ID;

/// Source of counterparty search results.
pub trait CounterpartySource: Send + Sync {
    /// Returns the counterparties matching `query`, most relevant first.
    fn search(&self, query: &str) -> Vec<Counterparty>;
}

/// Directory holding a single test member; every query matches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCounterpartyDirectory;

impl FixedCounterpartyDirectory {
    /// The member returned for every search.
    pub fn test_member() -> Counterparty {
        Counterparty {
            id: KNOWN_COUNTERPARTY_ID.to_string(),
            name: "TEST".to_string(),
            discount_card_number: "1111".to_string(),
            phone: "123456".to_string(),
            email: "a@b.c".to_string(),
        }
    }
}

impl CounterpartySource for FixedCounterpartyDirectory {
    fn search(&self, _query: &str) -> Vec<Counterparty> {
        vec![Self::test_member()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_ignores_query() {
        for query in ["", "TEST", "Иванов", "%20&search=x", "1111"] {
            let rows = FixedCounterpartyDirectory.search(query);
            assert_eq!(rows, vec![FixedCounterpartyDirectory::test_member()], "query {:?}", query);
        }
    }

    #[test]
    fn test_member_fields() {
        let member = FixedCounterpartyDirectory::test_member();
        assert_eq!(member.id, KNOWN_COUNTERPARTY_ID);
        assert_eq!(member.name, "TEST");
        assert_eq!(member.discount_card_number, "1111");
        assert_eq!(member.phone, "123456");
        assert_eq!(member.email, "a@b.c");
    }
}
