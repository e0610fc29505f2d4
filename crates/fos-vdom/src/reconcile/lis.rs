//! Longest increasing subsequence over matched prior indices

/// Mark the positions whose prior index belongs to one longest strictly
/// increasing run. Those children already sit in the right relative order
/// and never need to move. Unmatched positions (`None`) are never marked.
pub(super) fn stable_positions(sources: &[Option<usize>]) -> Vec<bool> {
    // tails[k]: (prior index, position) ending the best run of length k + 1
    let mut tails: Vec<(usize, usize)> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; sources.len()];

    for (position, source) in sources.iter().enumerate() {
        let Some(source) = *source else { continue };
        let len = tails.partition_point(|&(tail, _)| tail < source);
        predecessors[position] = len.checked_sub(1).map(|k| tails[k].1);
        if len == tails.len() {
            tails.push((source, position));
        } else {
            tails[len] = (source, position);
        }
    }

    let mut stable = vec![false; sources.len()];
    let mut cursor = tails.last().map(|&(_, position)| position);
    while let Some(position) = cursor {
        stable[position] = true;
        cursor = predecessors[position];
    }
    stable
}
