use egui::{Pos2, Rect, pos2, vec2};

/// Axis-aligned box spanned by two corner points.
///
/// The top-left corner is the per-axis minimum and the size is the absolute
/// per-axis difference, whichever direction the drag went.
pub(crate) fn box_between(anchor: Pos2, current: Pos2) -> Rect {
    Rect::from_two_pos(anchor, current)
}

/// Square box with the same top-left as [`box_between`] whose side is the
/// horizontal extent of the drag.
pub(crate) fn square_between(anchor: Pos2, current: Pos2) -> Rect {
    let spanned = box_between(anchor, current);
    let side = spanned.width();
    Rect::from_min_size(spanned.min, vec2(side, side))
}

/// Calculate the bounding box for a set of points
pub(crate) fn bounds_of(points: &[Pos2]) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(Rect::from_min_max(pos2(min_x, min_y), pos2(max_x, max_y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_between_normalizes_direction() {
        let rect = box_between(pos2(50.0, 10.0), pos2(20.0, 40.0));
        assert_eq!(rect.min, pos2(20.0, 10.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn test_square_uses_width_only() {
        let rect = square_between(pos2(0.0, 0.0), pos2(10.0, 80.0));
        assert_eq!(rect.min, pos2(0.0, 0.0));
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn test_bounds_of_points() {
        assert_eq!(bounds_of(&[]), None);

        let rect = bounds_of(&[pos2(3.0, 4.0), pos2(-1.0, 9.0), pos2(2.0, 0.0)]).unwrap();
        assert_eq!(rect.min, pos2(-1.0, 0.0));
        assert_eq!(rect.max, pos2(3.0, 9.0));
    }
}
