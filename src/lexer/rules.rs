use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::Category;

lazy_static! {
    pub static ref RULE_TABLE: RuleTable = RuleTable::build(Category::fixed())
        .expect("fixed-lexeme categories must have distinct literals");
    pub static ref MATCH_RULES: MatchRules = MatchRules::from_table(&RULE_TABLE);
}

/// Literal to category lookup for the fixed-lexeme categories.
#[derive(Debug)]
pub struct RuleTable {
    lookup: HashMap<&'static str, Category>,
}

impl RuleTable {
    /// Builds the table, rejecting any literal claimed by two categories.
    /// Open categories carry no literal and are skipped.
    pub fn build(categories: impl IntoIterator<Item = Category>) -> Result<RuleTable, Error> {
        let mut lookup = HashMap::new();

        for category in categories {
            let Some(literal) = category.literal() else {
                continue;
            };

            if let Some(first) = lookup.insert(literal, category) {
                return Err(Error::new(
                    ErrorImpl::DuplicateLiteral {
                        literal,
                        first,
                        second: category,
                    },
                    Position::null(),
                ));
            }
        }

        Ok(RuleTable { lookup })
    }

    pub fn classify(&self, lexeme: &str) -> Option<Category> {
        self.lookup.get(lexeme).copied()
    }

    /// Exact lookup first, then the open categories by shape.
    pub fn resolve(&self, lexeme: &str) -> Category {
        if let Some(category) = self.classify(lexeme) {
            return category;
        }

        let mut chars = lexeme.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()) => {
                Category::Ident
            }
            Some(_) if lexeme.chars().all(|c| c.is_ascii_digit()) => Category::Numeral,
            _ => Category::Error,
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = (&'static str, Category)> + '_ {
        self.lookup.iter().map(|(literal, category)| (*literal, *category))
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// What a matching rule recognises. Variants are declared in precedence
/// order: a match from an earlier variant beats any match from a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternKind {
    Fixed(Category),
    Word,
    Numeral,
    Any,
}

impl PatternKind {
    fn precedence(self) -> u8 {
        match self {
            PatternKind::Fixed(_) => 0,
            PatternKind::Word => 1,
            PatternKind::Numeral => 2,
            PatternKind::Any => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegexPattern {
    regex: Regex,
    kind: PatternKind,
}

impl RegexPattern {
    fn new(source: &str, kind: PatternKind) -> RegexPattern {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", source))
                .unwrap_or_else(|err| panic!("invalid pattern {:?}: {}", source, err)),
            kind,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Length in bytes of the match anchored at the start of `text`.
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end()).filter(|len| *len > 0)
    }
}

/// Ordered matching rules applied at the cursor.
///
/// Keywords have no rule of their own: they are matched as words and told
/// apart from identifiers by the rule table, so `ifx` stays one identifier.
#[derive(Debug, Clone)]
pub struct MatchRules {
    trivia: Regex,
    patterns: Vec<RegexPattern>,
}

impl MatchRules {
    pub fn from_table(table: &RuleTable) -> MatchRules {
        let mut patterns = table
            .literals()
            .filter(|(_, category)| !category.is_keyword())
            .map(|(literal, category)| RegexPattern::new(&regex::escape(literal), PatternKind::Fixed(category)))
            .collect::<Vec<_>>();

        patterns.push(RegexPattern::new("[a-zA-Z][a-zA-Z0-9]*", PatternKind::Word));
        patterns.push(RegexPattern::new("[0-9]+", PatternKind::Numeral));
        patterns.push(RegexPattern::new("(?s).", PatternKind::Any));

        // HashMap iteration order is arbitrary; sort so the list reads in
        // precedence order.
        patterns.sort_by_key(|pattern| pattern.kind);

        MatchRules {
            trivia: Regex::new(r"^(?:[ \t\n\x0B\x0C\r]+|#[^\n\r]*)")
                .unwrap_or_else(|err| panic!("invalid trivia pattern: {}", err)),
            patterns,
        }
    }

    /// Length of the whitespace run or comment at the start of `text`.
    pub fn trivia_len(&self, text: &str) -> Option<usize> {
        self.trivia.find(text).map(|m| m.end()).filter(|len| *len > 0)
    }

    /// Best rule at the start of `text`: the first precedence level with any
    /// match wins, and within a level the longest match wins.
    pub fn longest_match(&self, text: &str) -> Option<(usize, PatternKind)> {
        let mut best: Option<(usize, PatternKind)> = None;

        for pattern in &self.patterns {
            if let Some((_, kind)) = best {
                if kind.precedence() < pattern.kind.precedence() {
                    break;
                }
            }

            let Some(len) = pattern.match_len(text) else {
                continue;
            };

            if best.map_or(true, |(best_len, _)| len > best_len) {
                best = Some((len, pattern.kind));
            }
        }

        best
    }

    pub fn patterns(&self) -> &[RegexPattern] {
        &self.patterns
    }
}
