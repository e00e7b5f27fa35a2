//! Rect padding helpers.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Center a rect of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shrinks_width() {
        let inner = horizontal_padding(Rect::new(0, 0, 80, 10));
        assert_eq!(inner, Rect::new(2, 0, 76, 10));
    }

    #[test]
    fn padding_zero_width() {
        let inner = horizontal_padding(Rect::new(0, 0, 1, 1));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn centered_fits_inside() {
        let r = centered(Rect::new(0, 0, 80, 24), 20, 4);
        assert_eq!(r, Rect::new(30, 10, 20, 4));
        let clipped = centered(Rect::new(0, 0, 10, 2), 20, 4);
        assert_eq!(clipped, Rect::new(0, 0, 10, 2));
    }
}
