//! Tracks which rendered item sits closest to the middle of a scrolling
//! container. Positions are along the scroll axis.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub start: f32,
    pub size: f32,
}

impl Extent {
    pub fn new(start: f32, size: f32) -> Self {
        Self { start, size }
    }

    pub fn center(&self) -> f32 {
        self.start + self.size / 2.0
    }
}

/// Index of the item whose center is nearest the container's center. The
/// first item wins a tie.
pub fn closest_to_center(container: Extent, items: &[Extent]) -> Option<usize> {
    let center = container.center();
    let mut closest = None;
    let mut min_distance = f32::INFINITY;

    for (index, item) in items.iter().enumerate() {
        let distance = (item.center() - center).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(index);
        }
    }

    closest
}

/// Extents of `count` equally sized items laid out back to back.
pub fn uniform(count: usize, size: f32) -> Vec<Extent> {
    (0..count)
        .map(|i| Extent::new(i as f32 * size, size))
        .collect()
}
