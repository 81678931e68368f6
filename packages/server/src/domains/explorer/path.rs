//! Breadcrumb path state
//!
//! Pure navigation logic - NO IO. The path is an ordered list of segments;
//! its length is the drill-down depth.

/// The breadcrumb trail of a drill-down session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbPath {
    segments: Vec<String>,
}

impl BreadcrumbPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drill one level deeper.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Breadcrumb click: `-1` jumps to the root; index `k` keeps the crumbs
    /// up to and including `k`. Clicking the deepest crumb is a no-op.
    pub fn click(&mut self, index: i32) {
        if index < 0 {
            self.segments.clear();
            return;
        }
        let keep = (index as usize) + 1;
        if keep < self.segments.len() {
            self.segments.truncate(keep);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> BreadcrumbPath {
        let mut path = BreadcrumbPath::new();
        for segment in segments {
            path.push(*segment);
        }
        path
    }

    #[test]
    fn push_deepens_by_one() {
        let mut path = BreadcrumbPath::new();
        assert_eq!(path.depth(), 0);
        path.push("car");
        assert_eq!(path.depth(), 1);
        path.push("Fiat");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.segments(), ["car", "Fiat"]);
    }

    #[test]
    fn click_minus_one_always_returns_to_root() {
        for depth in 0..4 {
            let segments: Vec<String> = (0..depth).map(|i| format!("s{}", i)).collect();
            let mut path = BreadcrumbPath::new();
            for segment in &segments {
                path.push(segment.clone());
            }
            path.click(-1);
            assert!(path.is_root(), "depth {} should reset", depth);
        }
    }

    #[test]
    fn click_truncates_to_index_plus_one() {
        let mut p = path(&["car", "Fiat", "Egea"]);
        p.click(0);
        assert_eq!(p.segments(), ["car"]);
    }

    #[test]
    fn clicking_the_deepest_crumb_is_a_noop() {
        let mut p = path(&["car", "Fiat", "Egea"]);
        p.click(2);
        assert_eq!(p.segments(), ["car", "Fiat", "Egea"]);
    }

    #[test]
    fn click_is_idempotent() {
        let mut p = path(&["car", "Fiat", "Egea"]);
        p.click(1);
        let once = p.clone();
        p.click(1);
        assert_eq!(p, once);
    }
}
