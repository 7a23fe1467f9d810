use super::Order;

/// Expected outcome of every order for the `[7, 15, 6, 1, 2]` reference sequence.
pub const REFERENCE: [i32; 5] = [7, 15, 6, 1, 2];

pub fn expected(order: Order) -> [i32; 5] {
    match order {
        Order::Natural => [7, 15, 6, 1, 2],
        Order::Reverse => [2, 1, 6, 15, 7],
        Order::Ascending => [1, 2, 6, 7, 15],
        Order::Descending => [15, 7, 6, 2, 1],
        Order::SideCross => [1, 15, 2, 7, 6],
        Order::MiddleOut => [6, 15, 1, 7, 2],
    }
}

/// Runs the shared edge-case table against any way of producing a traversal.
pub fn run_all<F>(traverse: F)
where
    F: Fn(Order, &[i32]) -> Vec<i32>,
{
    test_empty(&traverse);
    test_single(&traverse);
    test_reference(&traverse);
    test_idempotent(&traverse);
    test_permutation(&traverse);
}

fn test_empty(traverse: &impl Fn(Order, &[i32]) -> Vec<i32>) {
    for order in Order::ALL {
        assert!(traverse(order, &[]).is_empty(), "{order}");
    }
}

fn test_single(traverse: &impl Fn(Order, &[i32]) -> Vec<i32>) {
    for order in Order::ALL {
        assert_eq!(traverse(order, &[42]), [42], "{order}");
    }
}

fn test_reference(traverse: &impl Fn(Order, &[i32]) -> Vec<i32>) {
    for order in Order::ALL {
        assert_eq!(traverse(order, &REFERENCE), expected(order), "{order}");
    }
}

fn test_idempotent(traverse: &impl Fn(Order, &[i32]) -> Vec<i32>) {
    let items = [5, -3, 5, 0, 12, 7, -3, 1];
    for order in Order::ALL {
        assert_eq!(traverse(order, &items), traverse(order, &items), "{order}");
    }
}

// Each order must emit exactly the stored elements, only rearranged.
fn test_permutation(traverse: &impl Fn(Order, &[i32]) -> Vec<i32>) {
    for len in 0..17 {
        let items = (0..len).map(|x| (x * 7919) % 13 - 6).collect::<Vec<i32>>();
        let mut stored = items.clone();
        stored.sort();

        for order in Order::ALL {
            let mut produced = traverse(order, &items);
            produced.sort();
            assert_eq!(produced, stored, "{order} over {len} elements");
        }
    }
}
