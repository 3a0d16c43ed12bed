/// Flatten one level of nesting, preserving order.
///
/// Accepts anything iterable of iterables: `Vec<Vec<T>>`, arrays of slices,
/// iterators of iterators.
pub fn concatenate_arrays<T, I>(arrays: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    arrays.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_strings() {
        let out = concatenate_arrays([vec!["a", "b"], vec!["c"]]);
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn concatenates_numbers() {
        let out = concatenate_arrays([vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn flattens_only_one_level() {
        let out = concatenate_arrays(vec![vec![vec![1], vec![2]], vec![vec![3]]]);
        assert_eq!(out, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_parts_are_skipped() {
        let parts: [&[u8]; 3] = [&[], &[7], &[]];
        let out: Vec<u8> = concatenate_arrays(parts.iter().map(|p| p.iter().copied()));
        assert_eq!(out, vec![7]);

        let none: Vec<Vec<u8>> = Vec::new();
        assert!(concatenate_arrays(none).is_empty());
    }
}
