use ratatui::layout::Rect;

/// Rect of at most `width` x `height`, centered in `area`
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(center_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(center_rect(area, 100, 30), area);
    }
}
