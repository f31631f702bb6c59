use serde::Deserialize;

/// Ordered list of example trees
///
/// Each preset is an insertion sequence: the first value is the root and
/// the rest are inserted in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PresetLibrary {
    presets: Vec<Vec<i64>>,
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new(vec![
            vec![2, 1, 3],
            vec![4, 2, 1, 3, 6, 5, 7],
            vec![8, 4, 2, 1, 3, 6, 5, 7, 12, 10, 9, 11, 14, 13, 15],
            vec![3, 1, 2, 6, 5, 4, 7],
            vec![6, 4, 2, 5, 1, 3, 7],
            vec![6, 2, 1, 4, 3, 5, 7],
            vec![1, 2, 3, 4, 5, 6, 7],
            vec![4, 3, 2, 1, 5, 6, 7],
        ])
    }
}

impl PresetLibrary {
    pub fn new(presets: Vec<Vec<i64>>) -> Self {
        Self { presets }
    }

    pub fn get(&self, index: usize) -> Option<&[i64]> {
        self.presets.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[i64]> {
        self.presets.iter().map(Vec::as_slice)
    }
}
