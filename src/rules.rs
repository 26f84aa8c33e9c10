use crate::tokens::Tokens;
use crate::types::Classification;

/// What a rule's action decided once its predicate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The rule claimed the input; stop here.
    Done,
    /// The rule declined after inspecting the tokens; keep matching with the
    /// rules after it.
    Continue,
}

/// One signature: a cheap predicate over the tokens (and whatever earlier
/// stages already wrote) plus the action that fills in the record.
pub(crate) struct Rule {
    pub name: &'static str,
    pub matches: fn(&Tokens, &Classification) -> bool,
    pub apply: fn(&mut Tokens, &mut Classification) -> Outcome,
}

/// Predicate: a token with this key exists.
macro_rules! present {
    ($key:literal) => {
        |t: &Tokens, _: &Classification| t.exists($key)
    };
}

/// Predicate: a token with this key exists and carries a value.
macro_rules! valued {
    ($key:literal) => {
        |t: &Tokens, _: &Classification| t.get_non_empty($key).is_some()
    };
}

pub(crate) use {present, valued};

/// Ordered signature list.  Earlier rules take priority over later ones even
/// when both would match, so the table order *is* the priority order.
pub(crate) struct RuleTable {
    pub kind: &'static str,
    pub rules: &'static [Rule],
}

impl RuleTable {
    /// Run the first rule that matches and claims the input.
    ///
    /// Returns the name of the winning rule, or `None` when nothing matched
    /// (a legitimate result: the record keeps its zero values).
    pub fn apply_first(
        &self,
        tokens: &mut Tokens,
        record: &mut Classification,
    ) -> Option<&'static str> {
        for rule in self.rules {
            if !(rule.matches)(tokens, record) {
                continue;
            }
            match (rule.apply)(tokens, record) {
                Outcome::Done => {
                    tracing::trace!(table = self.kind, rule = rule.name, "rule matched");
                    return Some(rule.name);
                }
                Outcome::Continue => {
                    tracing::trace!(table = self.kind, rule = rule.name, "rule declined");
                }
            }
        }
        None
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_a(t: &Tokens, _: &Classification) -> bool {
        t.exists("a")
    }
    fn has_b(t: &Tokens, _: &Classification) -> bool {
        t.exists("b")
    }
    fn set_a(_: &mut Tokens, c: &mut Classification) -> Outcome {
        c.name = "A".into();
        Outcome::Done
    }
    fn set_b(_: &mut Tokens, c: &mut Classification) -> Outcome {
        c.name = "B".into();
        Outcome::Done
    }
    fn decline(_: &mut Tokens, c: &mut Classification) -> Outcome {
        c.version = "declined".into();
        Outcome::Continue
    }

    static TABLE: RuleTable = RuleTable {
        kind: "test",
        rules: &[
            Rule {
                name: "a",
                matches: has_a,
                apply: set_a,
            },
            Rule {
                name: "b",
                matches: has_b,
                apply: set_b,
            },
        ],
    };

    static DECLINING: RuleTable = RuleTable {
        kind: "test",
        rules: &[
            Rule {
                name: "decline",
                matches: has_a,
                apply: decline,
            },
            Rule {
                name: "a",
                matches: has_a,
                apply: set_a,
            },
        ],
    };

    fn tokens(keys: &[&str]) -> Tokens {
        let mut t = Tokens::default();
        for k in keys {
            t.push(k, "");
        }
        t
    }

    #[test]
    fn first_match_wins_regardless_of_token_order() {
        let mut c = Classification::default();
        let mut t = tokens(&["b", "a"]);
        assert_eq!(TABLE.apply_first(&mut t, &mut c), Some("a"));
        assert_eq!(c.name, "A");
    }

    #[test]
    fn later_rule_when_earlier_does_not_match() {
        let mut c = Classification::default();
        let mut t = tokens(&["b"]);
        assert_eq!(TABLE.apply_first(&mut t, &mut c), Some("b"));
        assert_eq!(c.name, "B");
    }

    #[test]
    fn no_match_leaves_record_untouched() {
        let mut c = Classification::default();
        let mut t = tokens(&["z"]);
        assert_eq!(TABLE.apply_first(&mut t, &mut c), None);
        assert_eq!(c, Classification::default());
    }

    #[test]
    fn declined_rule_continues_with_next() {
        let mut c = Classification::default();
        let mut t = tokens(&["a"]);
        assert_eq!(DECLINING.apply_first(&mut t, &mut c), Some("a"));
        assert_eq!(c.name, "A");
        assert_eq!(c.version, "declined");
    }

    #[test]
    fn names_in_priority_order() {
        assert_eq!(TABLE.names().collect::<Vec<_>>(), ["a", "b"]);
    }
}
