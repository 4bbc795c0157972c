//! Calendar placement against the input and the viewport.
use crate::{
    host::{Rect, Viewport},
    options::Placement,
};

/// Page coordinates `(top, left)` for the calendar.
///
/// `input` and `calendar` are viewport-relative boxes. The result is
/// clamped horizontally into the viewport. A calendar overflowing the bottom
/// edge flips above the input, and one that would start above the page flips
/// back below it.
pub fn compute_position(
    placement: Placement,
    input: Rect,
    calendar: Rect,
    viewport: Viewport,
) -> (f64, f64) {
    let above = input.top - calendar.height + viewport.scroll_y;
    let below = input.bottom() + viewport.scroll_y;

    let mut top = if placement.is_top() { above } else { below };
    let mut left = if placement.is_end() {
        input.right() - calendar.width + viewport.scroll_x
    } else {
        input.left + viewport.scroll_x
    };

    if left + calendar.width > viewport.width {
        left = viewport.width - calendar.width;
    }
    if left < 0.0 {
        left = 0.0;
    }
    if top + calendar.height > viewport.height {
        top = above;
    }
    if top < 0.0 {
        top = below;
    }
    (top, left)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
        scroll_x: 0.0,
        scroll_y: 0.0,
    };
    const CALENDAR: Rect = Rect::new(0.0, 0.0, 300.0, 320.0);

    #[test]
    fn bottom_start_sits_under_the_input() {
        let input = Rect::new(100.0, 50.0, 200.0, 30.0);
        assert_eq!(
            compute_position(Placement::BottomStart, input, CALENDAR, VIEWPORT),
            (80.0, 100.0)
        );
    }

    #[test]
    fn end_placements_align_right_edges() {
        let input = Rect::new(400.0, 400.0, 200.0, 30.0);
        let (top, left) = compute_position(Placement::TopEnd, input, CALENDAR, VIEWPORT);
        assert_eq!((top, left), (80.0, 300.0));
        let (_, left) = compute_position(Placement::BottomEnd, input, CALENDAR, VIEWPORT);
        assert_eq!(left, 300.0);
    }

    #[test]
    fn clamps_horizontally() {
        let right = Rect::new(700.0, 10.0, 80.0, 30.0);
        let (_, left) = compute_position(Placement::BottomStart, right, CALENDAR, VIEWPORT);
        assert_eq!(left, 500.0);

        let leftmost = Rect::new(10.0, 10.0, 80.0, 30.0);
        let (_, left) = compute_position(Placement::BottomEnd, leftmost, CALENDAR, VIEWPORT);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn flips_above_when_overflowing_bottom() {
        let input = Rect::new(10.0, 500.0, 200.0, 30.0);
        let (top, _) = compute_position(Placement::BottomStart, input, CALENDAR, VIEWPORT);
        assert_eq!(top, 180.0);
    }

    #[test]
    fn flips_below_when_above_the_page() {
        let input = Rect::new(10.0, 20.0, 200.0, 30.0);
        let (top, _) = compute_position(Placement::TopStart, input, CALENDAR, VIEWPORT);
        assert_eq!(top, 50.0);
    }

    #[test]
    fn scroll_offsets_apply() {
        let viewport = Viewport {
            scroll_x: 5.0,
            scroll_y: 100.0,
            ..VIEWPORT
        };
        let input = Rect::new(10.0, 20.0, 200.0, 30.0);
        assert_eq!(
            compute_position(Placement::BottomStart, input, CALENDAR, viewport),
            (150.0, 15.0)
        );
    }
}
