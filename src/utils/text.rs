use regex::Regex;
use std::collections::HashSet;

pub fn tokenize_text(text: &str) -> Vec<String> {
    let re = Regex::new(r"\b[a-zA-Z]+\b").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 2)
        .collect()
}

pub fn split_sentences(text: &str) -> Vec<String> {
    let re = Regex::new(r"[^.!?\n]+[.!?]*").unwrap();
    re.find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

pub fn extract_image_urls(text: &str) -> Vec<String> {
    let re = Regex::new(r#"(?i)https?://[^\s)\]>"']+\.(?:png|jpe?g|gif|svg|webp)"#).unwrap();

    let mut seen = HashSet::new();
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
