/// A 2D tilemap grid. A city map has hard edges, so unlike a planetary
/// map there is no horizontal wrapping; callers bounds-check instead.
#[derive(Clone, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get 4-connected neighbors (up, down, left, right), clamped to the map.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if x > 0 {
            result.push((x - 1, y));
        }
        if x < self.width - 1 {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y < self.height - 1 {
            result.push((x, y + 1));
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Raw row-major cell slice, for byte-level comparison of two maps.
    pub fn cells(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut map: Tilemap<u8> = Tilemap::new(8, 4);
        map.set(7, 3, 42);
        assert_eq!(*map.get(7, 3), 42);
        assert_eq!(*map.get(0, 0), 0);
    }

    #[test]
    fn test_no_wrapping() {
        let map: Tilemap<u8> = Tilemap::new(8, 4);
        assert!(!map.in_bounds(-1, 0));
        assert!(!map.in_bounds(8, 0));
        assert!(!map.in_bounds(0, 4));
        assert!(map.in_bounds(7, 3));
    }

    #[test]
    fn test_neighbors_at_corner() {
        let map: Tilemap<u8> = Tilemap::new(8, 4);
        let n = map.neighbors(0, 0);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut map: Tilemap<u8> = Tilemap::new(3, 2);
        map.set(2, 1, 9);
        let found: Vec<_> = map.iter().filter(|(_, _, v)| **v == 9).collect();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].0, found[0].1), (2, 1));
    }
}
