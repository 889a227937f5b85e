//! Rhyme detection between syllables.
//!
//! Syllables are compared in lower case against the Finnish vowel set
//! `aeiouyäö`. Within a stanza, words are grouped by their last syllable (or
//! by every syllable) and syllables that rhyme perfectly share a group.

use serde::{Deserialize, Serialize};

use super::model::Stanza;

const VOWELS: &str = "aeiouyäö";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// How two syllables rhyme, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RhymeType {
    /// Same nucleus and coda, different onset: `sa` / `ka`.
    Perfect,
    /// One syllable is the other with a trailing `n`: `lo` / `lon`.
    SuppressedOrExtended,
    /// Same vowels in the same order: `kat` / `pas`.
    Vowel,
    /// Same consonants in the same order and as many vowels: `kat` / `kit`.
    Consonant,
    /// No rhyme.
    None,
}

/// Vowels and letters that are not vowels, in order.
fn split_vowels_and_consonants(syllable: &[char]) -> (Vec<char>, Vec<char>) {
    let vowels = syllable.iter().copied().filter(|c| is_vowel(*c)).collect();
    let consonants = syllable
        .iter()
        .copied()
        .filter(|c| !is_vowel(*c) && c.is_alphabetic())
        .collect();
    (vowels, consonants)
}

fn is_perfect(a: &[char], b: &[char]) -> bool {
    let (Some(va), Some(vb)) = (a.iter().position(|c| is_vowel(*c)), b.iter().position(|c| is_vowel(*c)))
    else {
        return false;
    };
    a[va..] == b[vb..] && a[..va] != b[..vb]
}

fn is_suppressed_or_extended(a: &[char], b: &[char]) -> bool {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };
    long.len() == short.len() + 1 && long.last() == Some(&'n') && long.starts_with(short)
}

/// Classify how syllables `a` and `b` rhyme.
pub fn rhyme_type(a: &str, b: &str) -> RhymeType {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if is_perfect(&a, &b) {
        return RhymeType::Perfect;
    }
    if is_suppressed_or_extended(&a, &b) {
        return RhymeType::SuppressedOrExtended;
    }

    let (vowels_a, consonants_a) = split_vowels_and_consonants(&a);
    let (vowels_b, consonants_b) = split_vowels_and_consonants(&b);

    if !vowels_a.is_empty() && vowels_a == vowels_b {
        RhymeType::Vowel
    } else if !consonants_a.is_empty()
        && consonants_a == consonants_b
        && vowels_a.len() == vowels_b.len()
    {
        RhymeType::Consonant
    } else {
        RhymeType::None
    }
}

/// Syllables that rhyme perfectly and the words they occur in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RhymeGroup {
    /// Lower-cased syllables of the group, in order of first appearance.
    pub syllables: Vec<String>,
    /// Lower-cased words containing one of the syllables.
    pub words: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Group the words of a stanza by rhyming syllables.
///
/// With `every_syllable` false only each word's last syllable is considered.
/// Groups with fewer than two distinct words are dropped.
pub fn group_rhymes(stanza: &Stanza, every_syllable: bool) -> Vec<RhymeGroup> {
    // syllable -> words, in order of first appearance
    let mut by_syllable: Vec<(String, Vec<String>)> = Vec::new();
    for word in stanza.words() {
        let text = word.text().to_lowercase();
        let syllables: Vec<&str> = if every_syllable {
            word.syllables.iter().map(|s| s.as_str()).collect()
        } else {
            word.last_syllable().map(|s| s.as_str()).into_iter().collect()
        };
        for syllable in syllables {
            let key = syllable.to_lowercase();
            match by_syllable.iter_mut().find(|(k, _)| *k == key) {
                Some((_, words)) => push_unique(words, text.clone()),
                None => by_syllable.push((key, vec![text.clone()])),
            }
        }
    }

    let mut grouped = vec![false; by_syllable.len()];
    let mut groups = Vec::new();
    for (i, (key, words)) in by_syllable.iter().enumerate() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;
        let mut group = RhymeGroup {
            syllables: vec![key.clone()],
            words: words.clone(),
        };
        for (j, (other, other_words)) in by_syllable.iter().enumerate().skip(i + 1) {
            if !grouped[j] && rhyme_type(key, other) == RhymeType::Perfect {
                grouped[j] = true;
                group.syllables.push(other.clone());
                for w in other_words {
                    push_unique(&mut group.words, w.clone());
                }
            }
        }
        if group.words.len() > 1 {
            groups.push(group);
        }
    }

    tracing::debug!("Found {} rhyme groups in stanza", groups.len());
    groups
}
