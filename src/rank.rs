use hashbrown::HashMap;

/// Returns the top phrases by count, highest first. Ties between equal
/// counts come out in arbitrary order.
pub fn top_phrases(phrases: &HashMap<String, u32>, top: usize) -> Vec<(u32, String)> {
    let mut ranked: Vec<(u32, String)> = phrases
        .iter()
        .map(|(phrase, &count)| (count, phrase.clone()))
        .collect();
    ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    ranked.truncate(top);
    ranked
}

pub fn format_ranked(ranked: &[(u32, String)]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, (count, phrase))| format!("#{}:\t({}) {}", i + 1, count, phrase))
        .collect()
}
