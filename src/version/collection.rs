//! Bounds-checked element access

/// Extension trait for reading an element without risking an out-of-bounds panic
pub trait SafeGet<T> {
    /// Returns the element at `index`, or `None` when `index` is out of bounds
    fn safe_get(&self, index: usize) -> Option<&T>;
}

impl<T> SafeGet<T> for [T] {
    fn safe_get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self[index])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some("Hello"))]
    #[case(1, Some("World"))]
    #[case(2, None)]
    #[case(usize::MAX, None)]
    fn safe_get_returns_element_only_within_bounds(
        #[case] index: usize,
        #[case] expected: Option<&str>,
    ) {
        let items = vec!["Hello", "World"];
        assert_eq!(items.safe_get(index).copied(), expected);
    }

    #[test]
    fn safe_get_on_empty_slice_returns_none() {
        let items: [u8; 0] = [];
        assert_eq!(items.safe_get(0), None);
    }
}
