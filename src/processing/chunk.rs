//! Contiguous partitioning of the document list across workers.

/// Divide a list into `n_parts` contiguous chunks of near-equal size.
///
/// Chunk `i` covers positions `round(division * i)..round(division * (i + 1))`
/// where `division = len / n_parts`. Concatenating the chunks in order
/// reproduces the input exactly, and chunk sizes differ by at most one.
/// `n_parts` larger than the list yields empty chunks for the excess
/// workers. `n_parts` must be at least 1 (validated at the configuration
/// level).
pub fn chunk_list<T: Clone>(list: &[T], n_parts: usize) -> Vec<Vec<T>> {
    let division = list.len() as f64 / n_parts as f64;

    (0..n_parts)
        .map(|i| {
            let start = (division * i as f64).round() as usize;
            let end = (division * (i + 1) as f64).round() as usize;
            list[start..end].to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_even() {
        let list: Vec<usize> = (0..8).collect();
        let chunks = chunk_list(&list, 4);

        assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]);
    }

    #[test]
    fn test_chunk_uneven() {
        let list: Vec<usize> = (0..10).collect();
        let chunks = chunk_list(&list, 3);

        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 10);
        assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
    }

    #[test]
    fn test_chunk_single_part() {
        let list: Vec<usize> = (0..5).collect();
        let chunks = chunk_list(&list, 1);

        assert_eq!(chunks, vec![list]);
    }

    #[test]
    fn test_chunk_more_parts_than_items() {
        let list: Vec<usize> = (0..3).collect();
        let chunks = chunk_list(&list, 7);

        assert_eq!(chunks.len(), 7);
        assert_eq!(chunks.iter().map(Vec::len).sum::<usize>(), 3);
        assert_eq!(chunks.concat(), list);
    }

    #[test]
    fn test_chunk_empty_list() {
        let list: Vec<usize> = Vec::new();
        let chunks = chunk_list(&list, 4);

        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(Vec::is_empty));
    }

    // exactness and balance over a grid of lengths and part counts
    #[test]
    fn test_chunk_partition_grid() {
        for len in 0..25 {
            let list: Vec<usize> = (0..len).collect();
            for n_parts in 1..10 {
                let chunks = chunk_list(&list, n_parts);

                assert_eq!(chunks.len(), n_parts);
                assert_eq!(chunks.concat(), list, "len={} n={}", len, n_parts);

                let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
                let max = sizes.iter().max().unwrap();
                let min = sizes.iter().min().unwrap();
                assert!(max - min <= 1, "len={} n={} sizes={:?}", len, n_parts, sizes);
            }
        }
    }
}
