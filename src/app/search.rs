use crate::api::models::Place;
use crate::util::normalize;
use std::collections::HashSet;

pub const MIN_SCORE: i32 = i32::MIN / 2;

/// Search modal state: query text plus the ranked place ids it matches.
#[derive(Debug, Default)]
pub struct SearchState {
    pub input: String,
    pub results: Vec<u64>,
    pub selected_index: usize,
}

impl SearchState {
    pub fn reset(&mut self, places: &[Place]) {
        self.input.clear();
        self.selected_index = 0;
        self.refresh(places);
    }

    pub fn on_input(&mut self, ch: char, places: &[Place]) {
        self.input.push(ch);
        self.refresh(places);
    }

    pub fn on_backspace(&mut self, places: &[Place]) {
        self.input.pop();
        self.refresh(places);
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let len = self.results.len() as isize;
        self.selected_index = (self.selected_index as isize + delta).clamp(0, len - 1) as usize;
    }

    pub fn selected(&self) -> Option<u64> {
        self.results.get(self.selected_index).copied()
    }

    /// Re-ranks against the current places; called on every keystroke and reload.
    pub fn refresh(&mut self, places: &[Place]) {
        self.results = rank(&self.input, places);
        let count = self.results.len();
        self.selected_index = if count == 0 { 0 } else { self.selected_index.min(count - 1) };
    }
}

/// Place ids ordered by match quality. An empty query keeps the list order.
pub fn rank(query: &str, places: &[Place]) -> Vec<u64> {
    if query.trim().is_empty() {
        return places.iter().map(|p| p.id).collect();
    }
    let query = normalize(query);
    let mut scored: Vec<(usize, i32)> = places
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let by_name = score_normalized(&query, &normalize(&p.name));
            // Address hits rank below name hits.
            let by_address = score_normalized(&query, &normalize(&p.address)) - 30;
            (i, by_name.max(by_address))
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(i, _)| places[i].id).collect()
}

/// Fuzzy score of an already normalized query against an already normalized candidate.
pub fn score_normalized(query: &str, candidate: &str) -> i32 {
    if query.is_empty() || candidate.is_empty() {
        return MIN_SCORE;
    }
    if query == candidate {
        return 500;
    }

    let mut score: i32 = 0;
    if candidate.starts_with(query) {
        score += 120;
    }

    match subsequence_positions(query, candidate) {
        Some(pos) => {
            score += 60;
            score += best_streak(&pos) as i32 * 6;
        }
        // Not even a subsequence: only token overlap can still rescue it.
        None => score -= 60,
    }

    let q_tokens: Vec<&str> = query.split_whitespace().collect();
    let c_tokens: Vec<&str> = candidate.split_whitespace().collect();
    let q_set: HashSet<&str> = q_tokens.iter().copied().collect();
    let c_set: HashSet<&str> = c_tokens.iter().copied().collect();
    score += q_set.intersection(&c_set).count() as i32 * 40;
    score += q_tokens
        .iter()
        .filter(|q| c_tokens.iter().any(|c| c.starts_with(*q)))
        .count() as i32
        * 24;

    score -= bounded_lev(query, candidate, 3) as i32 * 12;
    score -= (candidate.len() as i32 - query.len() as i32).abs().min(12);
    score
}

fn subsequence_positions(needle: &str, hay: &str) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(needle.len());
    let mut hay_iter = hay.char_indices();
    for ch in needle.chars() {
        let (i, _) = hay_iter.by_ref().find(|(_, c)| *c == ch)?;
        positions.push(i);
    }
    Some(positions)
}

fn best_streak(positions: &[usize]) -> usize {
    let mut best = 0usize;
    let mut cur = 0usize;
    let mut prev: Option<usize> = None;
    for &p in positions {
        cur = match prev {
            Some(q) if p == q + 1 => cur + 1,
            _ => 1,
        };
        best = best.max(cur);
        prev = Some(p);
    }
    best
}

/// Levenshtein distance capped at `bound + 1`.
fn bounded_lev(a: &str, b: &str, bound: usize) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return n.max(m).min(bound + 1);
    }

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];
    for i in 1..=n {
        curr[0] = i;
        let mut row_min = curr[0];
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            row_min = row_min.min(curr[j]);
        }
        if row_min > bound {
            return bound + 1;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m].min(bound + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Phone;

    fn place(id: u64, name: &str, address: &str) -> Place {
        Place {
            id,
            name: name.into(),
            address: address.into(),
            phone: Phone::Number(1),
            avatar_photo: None,
            phone_numbers: None,
        }
    }

    #[test]
    fn exact_name_ranks_first() {
        let places = vec![
            place(1, "Cafe Central", "Ring 1"),
            place(2, "Cafe", "Main St"),
            place(3, "Bakery", "Cafe Lane"),
        ];
        let ids = rank("cafe", &places);
        assert_eq!(ids.first(), Some(&2));
        assert!(ids.contains(&1));
    }

    #[test]
    fn empty_query_keeps_order() {
        let places = vec![place(5, "B", "x"), place(4, "A", "y")];
        assert_eq!(rank("  ", &places), vec![5, 4]);
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let places = vec![place(1, "Cafe", "Main St")];
        assert!(rank("zzzz", &places).is_empty());
    }

    #[test]
    fn selection_is_clamped_after_refresh() {
        let places = vec![place(1, "Cafe", "Main St"), place(2, "Cake Shop", "Side St")];
        let mut s = SearchState::default();
        s.reset(&places);
        s.move_selection(5);
        assert_eq!(s.selected(), Some(2));
        s.on_input('c', &places);
        s.on_input('a', &places);
        s.on_input('f', &places);
        s.on_input('e', &places);
        assert_eq!(s.selected(), Some(1));
    }

    #[test]
    fn lev_is_bounded() {
        assert_eq!(bounded_lev("abc", "abc", 3), 0);
        assert_eq!(bounded_lev("abc", "abd", 3), 1);
        assert_eq!(bounded_lev("a", "zzzzzzz", 3), 4);
    }
}
