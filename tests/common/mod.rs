#![allow(dead_code)]

use word_frequency::WordRegistry;

pub fn registry_from(words: &[&str]) -> WordRegistry {
    let mut registry = WordRegistry::new();
    for word in words {
        registry.insert(word).unwrap();
    }
    registry
}

pub fn pairs(registry: &WordRegistry) -> Vec<(String, u64)> {
    registry.iter().map(Into::into).collect()
}

pub fn words(registry: &WordRegistry) -> Vec<String> {
    registry.iter().map(|e| e.word.to_string()).collect()
}

pub fn is_alphabetical(registry: &WordRegistry) -> bool {
    let words = words(registry);
    words.windows(2).all(|w| w[0] < w[1])
}

pub const STORY: &str = "The fox runs. The fox jumps!\n\
                         \"The END,\" said the fox's friend -- don't stop.\n";
