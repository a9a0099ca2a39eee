//! Identifier classification and the two feature schemas.
//!
//! IPv4 schema: octet statistics plus string entropy and private-range flags.
//! Domain schema: length, character-class ratios, entropy, and lexical
//! suspicion signals. Both produce exactly [`super::FEATURE_DIM`] values.

use super::{FeatureSchema, FeatureVector};
use std::collections::{HashMap, HashSet};

/// Substrings that mark a domain as lexically suspicious.
const SUSPICIOUS_WORDS: [&str; 7] = ["free", "win", "prize", "crypto", "bank", "secure", "login"];

/// Classification of a raw identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Ipv4([u8; 4]),
    Domain,
}

impl IdentifierKind {
    /// IPv4 iff splitting on '.' yields exactly four tokens, each parsing
    /// as an integer in 0–255. Malformed or overflowing tokens fall back
    /// to domain classification.
    pub fn of(identifier: &str) -> Self {
        let mut octets = [0u8; 4];
        let mut count = 0;
        for token in identifier.split('.') {
            if count == 4 {
                return IdentifierKind::Domain;
            }
            match token.parse::<u8>() {
                Ok(v) => octets[count] = v,
                Err(_) => return IdentifierKind::Domain,
            }
            count += 1;
        }
        if count == 4 {
            IdentifierKind::Ipv4(octets)
        } else {
            IdentifierKind::Domain
        }
    }
}

/// Extract a fixed-length feature vector from an IP or domain string.
/// Pure and total: identical input yields identical output, and empty
/// input yields a zero-valued domain vector rather than an error.
pub fn extract(identifier: &str) -> FeatureVector {
    match IdentifierKind::of(identifier) {
        IdentifierKind::Ipv4(octets) => ipv4_features(identifier, octets),
        IdentifierKind::Domain => domain_features(identifier),
    }
}

fn ipv4_features(identifier: &str, octets: [u8; 4]) -> FeatureVector {
    let vals = octets.map(f64::from);
    let sum: f64 = vals.iter().sum();
    let mean = sum / 4.0;
    let variance = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 4.0;
    let max = vals.iter().fold(0.0f64, |a, &b| a.max(b));
    let min = vals.iter().fold(255.0f64, |a, &b| a.min(b));
    let distinct = octets.iter().collect::<HashSet<_>>().len();

    FeatureVector {
        schema: FeatureSchema::Ipv4,
        values: [
            mean as f32,
            variance.sqrt() as f32,
            max as f32,
            min as f32,
            distinct as f32,
            shannon_entropy(identifier) as f32,
            if identifier.starts_with("192.168.") { 1.0 } else { 0.0 },
            if identifier.starts_with("10.") { 1.0 } else { 0.0 },
            vals[0] as f32 / 255.0,
            (sum / 1020.0) as f32,
        ],
    }
}

fn domain_features(identifier: &str) -> FeatureVector {
    let len = identifier.chars().count();
    if len == 0 {
        return FeatureVector::zeroed(FeatureSchema::Domain);
    }
    let lower = identifier.to_lowercase();
    let flen = len as f64;

    let dots = identifier.chars().filter(|&c| c == '.').count();
    let digits = identifier.chars().filter(char::is_ascii_digit).count();
    let distinct = identifier.chars().collect::<HashSet<_>>().len();
    let special = identifier.chars().filter(|&c| c == '-' || c == '_').count();
    let vowels = lower.chars().filter(|&c| is_vowel(c)).count();
    let suspicious = SUSPICIOUS_WORDS.iter().any(|w| lower.contains(w));

    FeatureVector {
        schema: FeatureSchema::Domain,
        values: [
            flen as f32,
            dots as f32,
            shannon_entropy(identifier) as f32,
            (digits as f64 / flen) as f32,
            (distinct as f64 / flen) as f32,
            if suspicious { 1.0 } else { 0.0 },
            longest_consonant_run(&lower) as f32,
            (flen / 50.0).min(1.0) as f32,
            (special as f64 / flen) as f32,
            (vowels as f64 / flen) as f32,
        ],
    }
}

/// Shannon entropy over the character distribution, in bits.
/// 0.0 for the empty string and for single-character repeats.
fn shannon_entropy(s: &str) -> f64 {
    let len = s.chars().count();
    if len == 0 {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let flen = len as f64;
    -counts
        .values()
        .map(|&n| {
            let p = n as f64 / flen;
            p * p.log2()
        })
        .sum::<f64>()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Longest contiguous run of non-vowel ASCII letters. Digits and
/// punctuation break the run; input is expected pre-lowercased.
fn longest_consonant_run(lower: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in lower.chars() {
        if c.is_ascii_lowercase() && !is_vowel(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
