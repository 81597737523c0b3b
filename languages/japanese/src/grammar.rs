use std::ops::Range;

use serde::Serialize;

use crate::jlpt::JlptLevel;
use crate::rules::DEFAULT_RULES;

pub const DEFAULT_CONTEXT_RADIUS: usize = 15;

/// Literal pattern. A candidate is rejected when the text before it ends with
/// a forbidden suffix or the text after it starts with a forbidden prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub literal: &'static str,
    /// Second half of a split form such as `しか…ない`, matched greedily up
    /// to the end of the line
    pub closing: Option<&'static str>,
    pub level: JlptLevel,
    pub description: &'static str,
    pub forbidden_preceding: &'static [&'static str],
    pub forbidden_following: &'static [&'static str],
}

impl GrammarRule {
    pub const fn new(literal: &'static str, level: JlptLevel, description: &'static str) -> Self {
        Self {
            literal,
            closing: None,
            level,
            description,
            forbidden_preceding: &[],
            forbidden_following: &[],
        }
    }

    /// Reject candidates preceded by any of `suffixes`
    pub const fn not_after(mut self, suffixes: &'static [&'static str]) -> Self {
        self.forbidden_preceding = suffixes;
        self
    }

    /// Reject candidates followed by any of `prefixes`
    pub const fn not_before(mut self, prefixes: &'static [&'static str]) -> Self {
        self.forbidden_following = prefixes;
        self
    }

    pub const fn until(mut self, closing: &'static str) -> Self {
        self.closing = Some(closing);
        self
    }

    /// Human readable pattern, `…` marking the gap of a split form
    pub fn pattern(&self) -> String {
        match self.closing {
            Some(closing) => format!("{}…{}", self.literal, closing),
            None => self.literal.to_string(),
        }
    }

    /// Code points of literal text; decides claiming order
    pub fn literal_len(&self) -> usize {
        self.literal.chars().count() + self.closing.map_or(0, |c| c.chars().count())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarMatch {
    pub text: String,
    pub pattern: String,
    pub level: JlptLevel,
    pub description: String,
    pub start_position: usize,
    pub end_position: usize,
    pub context: String,
}

/// Rule with its strings split into code points
struct CompiledRule {
    rule: GrammarRule,
    literal: Vec<char>,
    closing: Option<Vec<char>>,
    preceding: Vec<Vec<char>>,
    following: Vec<Vec<char>>,
}

impl CompiledRule {
    fn new(rule: GrammarRule) -> Self {
        let to_chars = |s: &str| s.chars().collect::<Vec<char>>();
        Self {
            literal: to_chars(rule.literal),
            closing: rule.closing.map(to_chars),
            preceding: rule.forbidden_preceding.iter().map(|s| to_chars(s)).collect(),
            following: rule.forbidden_following.iter().map(|s| to_chars(s)).collect(),
            rule,
        }
    }

    fn end_at(&self, chars: &[char], start: usize) -> Option<usize> {
        let opening_end = start + self.literal.len();
        let Some(closing) = &self.closing else {
            return Some(opening_end);
        };

        let line_end = chars[opening_end..]
            .iter()
            .position(|&c| c == '\n' || c == '\r')
            .map_or(chars.len(), |offset| opening_end + offset);

        // Greedy: the last closing literal on the line
        (opening_end..line_end)
            .rev()
            .find(|&p| p + closing.len() <= line_end && chars[p..].starts_with(closing))
            .map(|p| p + closing.len())
    }

    fn boundaries_allow(&self, chars: &[char], range: &Range<usize>) -> bool {
        let before = &chars[..range.start];
        let after = &chars[range.end..];
        !self.preceding.iter().any(|s| before.ends_with(s))
            && !self.following.iter().any(|p| after.starts_with(p))
    }

    /// Left-to-right, non-overlapping occurrences of this rule alone
    fn occurrences(&self, chars: &[char]) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        if self.literal.is_empty() {
            return found;
        }

        let mut pos = 0;
        while pos + self.literal.len() <= chars.len() {
            if chars[pos..].starts_with(&self.literal)
                && let Some(end) = self.end_at(chars, pos)
                && self.boundaries_allow(chars, &(pos..end))
            {
                found.push(pos..end);
                pos = end;
                continue;
            }
            pos += 1;
        }

        found
    }
}

pub struct GrammarPatternMatcher {
    /// Claiming order: longest literal first, declaration order on ties
    compiled: Vec<CompiledRule>,
    rules: Vec<GrammarRule>,
    context_radius: usize,
}

impl Default for GrammarPatternMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl GrammarPatternMatcher {
    pub fn new(rules: Vec<GrammarRule>) -> Self {
        let mut compiled: Vec<CompiledRule> = rules.iter().copied().map(CompiledRule::new).collect();
        compiled.sort_by_key(|c| std::cmp::Reverse(c.rule.literal_len()));

        Self {
            compiled,
            rules,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    /// Matcher over the built-in N5–N1 table
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// Rules claim code point positions longest pattern first, so `は` never
    /// takes a character already owned by `てはいけません`. An occurrence
    /// touching a claimed position is dropped whole.
    pub fn scan(&self, text: &str) -> Vec<GrammarMatch> {
        let chars: Vec<char> = text.chars().collect();
        let mut claimed = vec![false; chars.len()];
        let mut matches = Vec::new();

        for compiled in &self.compiled {
            for range in compiled.occurrences(&chars) {
                if claimed[range.clone()].iter().any(|&taken| taken) {
                    continue;
                }
                claimed[range.clone()].fill(true);
                matches.push(self.build_match(&compiled.rule, &chars, range));
            }
        }

        matches.sort_by_key(|m| m.start_position);
        tracing::debug!("Grammar scan found {} matches", matches.len());
        matches
    }

    fn build_match(&self, rule: &GrammarRule, chars: &[char], range: Range<usize>) -> GrammarMatch {
        let context_start = range.start.saturating_sub(self.context_radius);
        let context_end = (range.end + self.context_radius).min(chars.len());

        GrammarMatch {
            text: chars[range.clone()].iter().collect(),
            pattern: rule.pattern(),
            level: rule.level,
            description: rule.description.to_string(),
            start_position: range.start,
            end_position: range.end,
            context: chars[context_start..context_end].iter().collect(),
        }
    }
}

/// Matches grouped by level, N5 first; empty levels are left out
pub fn group_by_level(matches: &[GrammarMatch]) -> Vec<(JlptLevel, Vec<&GrammarMatch>)> {
    JlptLevel::ALL
        .iter()
        .filter_map(|&level| {
            let group: Vec<&GrammarMatch> = matches.iter().filter(|m| m.level == level).collect();
            (!group.is_empty()).then_some((level, group))
        })
        .collect()
}
