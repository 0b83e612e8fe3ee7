//! Word-order permutations of a token chunk.

use std::collections::BTreeSet;

/// All distinct orderings of `tokens`, first-seen order preserved.
///
/// Orderings are generated by position (the first token varies slowest), so
/// the chunk's own order always comes first. Repeated tokens would produce
/// identical orderings; only the first of each is kept.
pub fn distinct_permutations(tokens: &[String]) -> Vec<Vec<String>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(tokens.len());
    let mut used = vec![false; tokens.len()];
    permute(tokens, &mut used, &mut current, &mut |perm: &[String]| {
        if seen.insert(perm.to_vec()) {
            out.push(perm.to_vec());
        }
    });
    out
}

fn permute(
    tokens: &[String],
    used: &mut [bool],
    current: &mut Vec<String>,
    emit: &mut dyn FnMut(&[String]),
) {
    if current.len() == tokens.len() {
        emit(current);
        return;
    }
    for idx in 0..tokens.len() {
        if used[idx] {
            continue;
        }
        used[idx] = true;
        current.push(tokens[idx].clone());
        permute(tokens, used, current, emit);
        current.pop();
        used[idx] = false;
    }
}
