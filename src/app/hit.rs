use ratatui::layout::{Position, Rect};

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    SearchBar,
    Help,
    ShowAllToggle,
    CategoryCard(u64),
    PlaceRow(u64),
    PlaceGallery(u64),
    Back,
}

/// Click areas registered while drawing a frame.
///
/// Parents are registered before the targets nested inside them, so the last
/// match for a point is the innermost one. Only that target receives the click.
#[derive(Debug, Default)]
pub struct HitMap {
    areas: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, area: Rect, target: Target) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((area, target));
        }
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        let pos = Position::new(x, y);
        self.areas
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, t)| *t)
    }
}
