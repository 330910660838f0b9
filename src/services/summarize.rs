use crate::utils::text::{split_sentences, tokenize_text};
use std::collections::HashMap;

pub const MAX_SUMMARY_SENTENCES: usize = 5;

fn sentence_score(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let words = tokenize_text(sentence);
    if words.is_empty() {
        return 0.0;
    }

    let total: usize = words
        .iter()
        .filter_map(|word| frequencies.get(word))
        .sum();

    total as f64 / words.len() as f64
}

pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for word in tokenize_text(text) {
        *frequencies.entry(word).or_insert(0) += 1;
    }

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| (position, sentence_score(sentence, &frequencies)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    // Emit the selected sentences in their original order
    let mut selected: Vec<usize> = scored
        .iter()
        .take(max_sentences)
        .map(|(position, _)| *position)
        .collect();
    selected.sort_unstable();

    selected
        .iter()
        .map(|&position| sentences[position].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
