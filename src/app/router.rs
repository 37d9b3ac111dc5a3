use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    CategoryDetail(u64),
    PlaceDetail(u64),
    PhotoGallery(u64),
    Search,
    Contact,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".into(),
            Route::CategoryDetail(id) => format!("/categories/{id}"),
            Route::PlaceDetail(id) => format!("/items/{id}"),
            Route::PhotoGallery(id) => format!("/photos/{id}"),
            Route::Search => "/modals/search".into(),
            Route::Contact => "/contact".into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Push/pop navigation over screens.
pub trait Navigator {
    fn push(&mut self, route: Route);
    /// Pops the current screen. Returns `false` when already at the root.
    fn back(&mut self) -> bool;
    fn current(&self) -> Route;
}

#[derive(Debug)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            stack: vec![Route::Dashboard],
        }
    }
}

impl History {
    /// Every pushed route, oldest first, excluding the root.
    #[cfg(test)]
    pub fn pushed(&self) -> &[Route] {
        &self.stack[1..]
    }
}

impl Navigator for History {
    fn push(&mut self, route: Route) {
        log::debug!("navigate {route}");
        self.stack.push(route);
    }

    fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_embed_ids() {
        assert_eq!(Route::CategoryDetail(4).path(), "/categories/4");
        assert_eq!(Route::PlaceDetail(1).path(), "/items/1");
        assert_eq!(Route::PhotoGallery(9).path(), "/photos/9");
        assert_eq!(Route::Search.path(), "/modals/search");
        assert_eq!(Route::Contact.path(), "/contact");
    }

    #[test]
    fn back_stops_at_root() {
        let mut h = History::default();
        h.push(Route::PlaceDetail(1));
        h.push(Route::PhotoGallery(1));
        assert_eq!(h.current(), Route::PhotoGallery(1));
        assert!(h.back());
        assert!(h.back());
        assert!(!h.back());
        assert_eq!(h.current(), Route::Dashboard);
    }
}
