/// Every ordering of `items`, in lexicographic order of input position.
/// The empty slice has exactly one ordering, the empty one.
pub fn permute<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let rest: Vec<T> = items[..i].iter().chain(&items[i + 1..]).cloned().collect();
        for tail in permute(&rest) {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.push(head.clone());
            ordering.extend(tail);
            result.push(ordering);
        }
    }
    result
}
