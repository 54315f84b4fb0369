//! Heuristic prose rules. Not a grammar engine: each rule is a cheap pattern
//! check and reports at most one finding.

use regex::Regex;

use crate::options::Options;

use super::{CheckDetail, CheckResult, Checker, Severity};

/// Common misspellings and their corrections.
const TYPOS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("seperate", "separate"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("definately", "definitely"),
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("adress", "address"),
    ("beleive", "believe"),
    ("calender", "calendar"),
    ("enviroment", "environment"),
    ("existant", "existent"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("neccessary", "necessary"),
    ("occassion", "occasion"),
    ("paramter", "parameter"),
    ("persistant", "persistent"),
    ("succesful", "successful"),
    ("sucess", "success"),
    ("untill", "until"),
    ("wich", "which"),
    ("thier", "their"),
];

const INFORMAL: &[&str] = &[
    "gonna", "wanna", "gotta", "kinda", "sorta", "lol", "omg", "btw", "u", "ur", "pls", "plz",
    "thx", "ya",
];

pub struct GrammarChecker {
    typo_pattern: Regex,
    informal_pattern: Regex,
    word_pattern: Regex,
}

impl Default for GrammarChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn whole_word_alternation(words: impl Iterator<Item = &'static str>) -> String {
    let alternatives: Vec<String> = words.map(regex::escape).collect();
    format!(r"(?i)\b(?:{})\b", alternatives.join("|"))
}

impl GrammarChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            typo_pattern: Regex::new(&whole_word_alternation(TYPOS.iter().map(|(w, _)| *w)))
                .expect("Invalid regex"),
            informal_pattern: Regex::new(&whole_word_alternation(INFORMAL.iter().copied()))
                .expect("Invalid regex"),
            word_pattern: Regex::new(r"\b[\w']+\b").expect("Invalid regex"),
        }
    }

    fn typo(&self, content: &str) -> Option<CheckDetail> {
        let found = self.typo_pattern.find(content)?;
        let word = found.as_str();
        let lower = word.to_lowercase();
        let fix = TYPOS
            .iter()
            .find(|(typo, _)| *typo == lower)
            .map_or("?", |(_, fix)| *fix);
        Some(CheckDetail::new(
            Severity::Error,
            "typo",
            format!("CRITICAL: Possible typo '{word}' (did you mean '{fix}'?)"),
        ))
    }

    /// Two identical words separated only by whitespace.
    fn repeated_word(&self, content: &str) -> Option<CheckDetail> {
        let words: Vec<_> = self.word_pattern.find_iter(content).collect();
        words.windows(2).find_map(|pair| {
            let (first, second) = (pair[0], pair[1]);
            let gap = &content[first.end()..second.start()];
            let repeated = gap.chars().all(char::is_whitespace)
                && first.as_str().to_lowercase() == second.as_str().to_lowercase();
            repeated.then(|| {
                CheckDetail::new(
                    Severity::Warning,
                    "repeated-word",
                    format!("Repeated word '{}'", second.as_str()),
                )
            })
        })
    }

    fn informal(&self, content: &str) -> Option<CheckDetail> {
        let found = self.informal_pattern.find(content)?;
        Some(CheckDetail::new(
            Severity::Warning,
            "informal",
            format!("Informal language '{}'", found.as_str()),
        ))
    }
}

/// Applies to prose only, so identifiers and single words are left alone.
fn capitalization(content: &str) -> Option<CheckDetail> {
    let text = content.trim();
    let starts_lowercase = text.chars().next().is_some_and(char::is_lowercase);
    (starts_lowercase && text.contains(char::is_whitespace)).then(|| {
        CheckDetail::new(
            Severity::Warning,
            "capitalization",
            "Text should start with a capital letter",
        )
    })
}

fn whitespace(content: &str) -> Option<CheckDetail> {
    content.trim().contains("  ").then(|| {
        CheckDetail::new(
            Severity::Warning,
            "whitespace",
            "Multiple consecutive spaces",
        )
    })
}

impl Checker for GrammarChecker {
    fn check(&self, content: &str, _options: &Options) -> CheckResult {
        let details: Vec<CheckDetail> = [
            self.typo(content),
            self.repeated_word(content),
            self.informal(content),
            capitalization(content),
            whitespace(content),
        ]
        .into_iter()
        .flatten()
        .collect();

        if details.is_empty() {
            return CheckResult::passed();
        }

        let message = details
            .iter()
            .map(|detail| detail.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        CheckResult::failed(message).with_details(details)
    }
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
