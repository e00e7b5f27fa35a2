//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

/// Fixed height for the footer: input block (3 lines: border + content + border) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Regions for the main layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// May have zero height if the terminal is too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header (fixed top, `header_height` rows), body, and footer (fixed bottom).
/// The header gives way first when the terminal is too short.
pub fn main_splits(area: Rect, header_height: u16) -> MainSplits {
    let footer_h = FOOTER_HEIGHT.min(area.height);
    let header_h = header_height.min(area.height - footer_h);
    let body_h = area.height - footer_h - header_h;

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_h,
    };
    let body = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h),
        width: area.width,
        height: body_h,
    };
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h + body_h),
        width: area.width,
        height: footer_h,
    };

    MainSplits { header, body, footer }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let bottom_h = area.height.saturating_sub(top_h);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: bottom_h,
    };
    (top, bottom)
}
