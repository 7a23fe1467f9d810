use derive_more::Display;
use itertools::Itertools;

/// The six traversal orders a container can be walked in. Every order is computed from the stored
/// (insertion) sequence at the moment a traversal begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Order {
    /// Stored order, unchanged.
    #[display("natural")]
    Natural,
    /// Stored order, end to start.
    #[display("reverse")]
    Reverse,
    /// Smallest first.
    #[display("ascending")]
    Ascending,
    /// Largest first.
    #[display("descending")]
    Descending,
    /// Smallest, largest, second smallest, second largest, and so on.
    #[display("side-cross")]
    SideCross,
    /// Lower-middle stored element first, then alternately left and right of it.
    #[display("middle-out")]
    MiddleOut,
}

impl Order {
    pub const ALL: [Order; 6] = [
        Order::Natural,
        Order::Reverse,
        Order::Ascending,
        Order::Descending,
        Order::SideCross,
        Order::MiddleOut,
    ];
}

pub fn natural<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}

pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

/// Stable sort, so equal elements keep their stored relative order.
pub fn ascending<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted
}

/// Exact reverse of [`ascending`], including the placement of equal elements.
pub fn descending<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = ascending(items);
    sorted.reverse();
    sorted
}

/// Alternates between the low and the high end of the sorted sequence, starting from the low end.
/// For an odd number of elements the median is emitted last, on the low side's turn.
pub fn side_cross<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let sorted = ascending(items);
    let (low, high) = sorted.split_at(sorted.len().div_ceil(2));
    low.iter().interleave(high.iter().rev()).cloned().collect()
}

/// Starts at stored index `len / 2` and then walks outwards by increasing distance, visiting the
/// left neighbour before the right one. Once a side runs out the other one is drained.
pub fn middle_out<T: Clone>(items: &[T]) -> Vec<T> {
    let (left, rest) = items.split_at(items.len() / 2);
    match rest.split_first() {
        None => Vec::new(),
        Some((center, right)) => std::iter::once(center)
            .chain(left.iter().rev().interleave(right.iter()))
            .cloned()
            .collect(),
    }
}

/// Reorders `items` according to `order`.
pub fn arrange<T: Ord + Clone>(order: Order, items: &[T]) -> Vec<T> {
    match order {
        Order::Natural => natural(items),
        Order::Reverse => reverse(items),
        Order::Ascending => ascending(items),
        Order::Descending => descending(items),
        Order::SideCross => side_cross(items),
        Order::MiddleOut => middle_out(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::test_stand;

    const ITEMS: [i32; 5] = [7, 15, 6, 1, 2];

    #[test]
    fn test_reference_sequence() {
        assert_eq!(natural(&ITEMS), [7, 15, 6, 1, 2]);
        assert_eq!(reverse(&ITEMS), [2, 1, 6, 15, 7]);
        assert_eq!(ascending(&ITEMS), [1, 2, 6, 7, 15]);
        assert_eq!(descending(&ITEMS), [15, 7, 6, 2, 1]);
        assert_eq!(side_cross(&ITEMS), [1, 15, 2, 7, 6]);
        assert_eq!(middle_out(&ITEMS), [6, 15, 1, 7, 2]);
    }

    #[test]
    fn test_even_length() {
        let items = [40, 10, 30, 20];
        assert_eq!(side_cross(&items), [10, 40, 20, 30]);
        // Lower-middle is index 2 for four elements.
        assert_eq!(middle_out(&items), [30, 10, 20, 40]);
        assert_eq!(middle_out(&[1, 2]), [2, 1]);
        assert_eq!(side_cross(&[2, 1]), [1, 2]);
    }

    #[test]
    fn test_duplicates() {
        let items = [3, 1, 3, 2, 1];
        assert_eq!(ascending(&items), [1, 1, 2, 3, 3]);
        assert_eq!(descending(&items), [3, 3, 2, 1, 1]);
        assert_eq!(side_cross(&items), [1, 3, 1, 3, 2]);
    }

    #[test]
    fn test_stable_ties() {
        // Ordered by the key only, the tag tracks the stored position.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Tagged(u8, char);

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let items = [Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        let tags = |seq: Vec<Tagged>| seq.into_iter().map(|x| x.1).collect::<String>();

        assert_eq!(tags(ascending(&items)), "bdac");
        assert_eq!(tags(descending(&items)), "cadb");
        // Low half "bd", high half "ac" walked from the top.
        assert_eq!(tags(side_cross(&items)), "bcda");
    }

    #[test]
    fn test_middle_out_visits_every_position() {
        for len in 0..32usize {
            let items = (0..len).collect::<Vec<_>>();
            let mut visited = middle_out(&items);
            assert_eq!(visited.len(), len);
            if len > 0 {
                assert_eq!(visited[0], len / 2);
            }
            visited.sort();
            assert_eq!(visited, items);
        }
    }

    #[test]
    fn test_side_cross_alternates() {
        for len in 0..32i64 {
            let items = (0..len).rev().collect::<Vec<_>>();
            let crossed = side_cross(&items);
            for (ind, value) in crossed.iter().enumerate() {
                let step = (ind / 2) as i64;
                let expected = if ind % 2 == 0 { step } else { len - 1 - step };
                assert_eq!(*value, expected);
            }
            assert_eq!(crossed.len() as i64, len);
        }
    }

    #[test]
    fn test_arrange() {
        test_stand::run_all(|order, items| arrange(order, items));
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::SideCross.to_string(), "side-cross");
        assert_eq!(Order::MiddleOut.to_string(), "middle-out");
    }
}
