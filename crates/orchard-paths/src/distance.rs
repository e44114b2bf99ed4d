use orchard_core::{GeomError, Point, Rect};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Canonical bounding box of every monotone path between `a` and `b`.
#[inline]
pub fn canonical_box(a: Point, b: Point) -> Result<Rect, GeomError> {
    Rect::spanning(a, b)
}

/// The members of `nodes` that lie inside `rect` (boundaries included) and
/// satisfy `keep`.
pub fn nodes_in_box<I, F>(rect: Rect, nodes: I, keep: F) -> impl Iterator<Item = Point>
where
    I: IntoIterator<Item = Point>,
    F: Fn(Point) -> bool,
{
    nodes
        .into_iter()
        .filter(move |&p| rect.contains(p) && keep(p))
}

/// [`nodes_in_box`] with a predicate that accepts everything.
pub fn nodes_in_box_all<I>(rect: Rect, nodes: I) -> impl Iterator<Item = Point>
where
    I: IntoIterator<Item = Point>,
{
    nodes_in_box(rect, nodes, |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn canonical_box_rejects_coincident_points() {
        let p = Point::new(3, 3);
        assert_eq!(canonical_box(p, p), Err(GeomError::Degenerate(p)));
    }

    #[test]
    fn nodes_in_box_includes_boundaries() {
        let rect = canonical_box(Point::new(1, 1), Point::new(3, 3)).unwrap();
        let nodes = [
            Point::new(1, 1),
            Point::new(3, 3),
            Point::new(1, 3),
            Point::new(2, 2),
            Point::new(0, 2),
            Point::new(2, 4),
            Point::new(4, 0),
        ];
        let inside: Vec<_> = nodes_in_box_all(rect, nodes).collect();
        assert_eq!(
            inside,
            vec![
                Point::new(1, 1),
                Point::new(3, 3),
                Point::new(1, 3),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn nodes_in_box_applies_predicate() {
        let a = Point::new(0, 0);
        let rect = canonical_box(a, Point::new(2, 0)).unwrap();
        let nodes = [a, Point::new(1, 0), Point::new(2, 0), Point::new(1, 1)];
        let inside: Vec<_> = nodes_in_box(rect, nodes, |p| p != a).collect();
        assert_eq!(inside, vec![Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn anti_diagonal_box_covers_the_full_rectangle() {
        let rect = canonical_box(Point::new(0, 3), Point::new(3, 0)).unwrap();
        let corners = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(0, 3),
            Point::new(3, 3),
        ];
        assert_eq!(nodes_in_box_all(rect, corners).count(), 4);
    }
}
