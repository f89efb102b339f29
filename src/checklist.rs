//! Security Checklist
//!
//! Checked-set tracking, progress, status tier and the edge-triggered
//! celebration latch.

use std::collections::BTreeSet;

/// Qualitative status derived from progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Excellent,
    Good,
    Moderate,
    HighRisk,
    CriticalRisk,
}

impl StatusTier {
    /// Lower bounds are inclusive; only exactly 100 is Excellent.
    pub fn from_progress(progress: f64) -> Self {
        if progress >= 100.0 {
            StatusTier::Excellent
        } else if progress >= 75.0 {
            StatusTier::Good
        } else if progress >= 50.0 {
            StatusTier::Moderate
        } else if progress >= 25.0 {
            StatusTier::HighRisk
        } else {
            StatusTier::CriticalRisk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Excellent => "Excellent Security",
            StatusTier::Good => "Good Security",
            StatusTier::Moderate => "Moderate Risk",
            StatusTier::HighRisk => "High Risk",
            StatusTier::CriticalRisk => "Critical Risk",
        }
    }

    /// Colour token: "success", "warning" or "alert"
    pub fn tone(self) -> &'static str {
        match self {
            StatusTier::Excellent => "success",
            StatusTier::Good | StatusTier::Moderate => "warning",
            StatusTier::HighRisk | StatusTier::CriticalRisk => "alert",
        }
    }
}

/// Fires once when progress crosses into 100, re-arms when it drops below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CelebrationLatch {
    was_complete: bool,
}

impl CelebrationLatch {
    /// Feed the latest progress; true on a rising edge into 100.
    pub fn observe(&mut self, progress: f64) -> bool {
        let complete = progress >= 100.0;
        let fired = complete && !self.was_complete;
        self.was_complete = complete;
        fired
    }
}

/// Checked set over a fixed number of items
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    total: usize,
    checked: BTreeSet<u32>,
    latch: CelebrationLatch,
}

impl Checklist {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            checked: BTreeSet::new(),
            latch: CelebrationLatch::default(),
        }
    }

    /// Flip `id` in the checked set. Returns true when this toggle completed
    /// the list.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.checked.remove(&id) {
            self.checked.insert(id);
        }
        self.latch.observe(self.progress())
    }

    pub fn is_checked(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn checked(&self) -> &BTreeSet<u32> {
        &self.checked
    }

    /// Percentage in [0, 100]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let ratio = self.checked.len() as f64 / self.total as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    pub fn status(&self) -> StatusTier {
        StatusTier::from_progress(self.progress())
    }

    /// "{checked} of {total} practices followed"
    pub fn summary(&self) -> String {
        format!("{} of {} practices followed", self.checked.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CHECKLIST_ITEMS;

    fn full_list() -> Checklist {
        Checklist::new(CHECKLIST_ITEMS.len())
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut list = full_list();
        list.toggle(3);
        let before = list.checked().clone();

        list.toggle(5);
        list.toggle(5);
        assert_eq!(list.checked(), &before);

        list.toggle(3);
        assert!(list.checked().is_empty());
    }

    #[test]
    fn test_progress_bounds() {
        let mut list = full_list();
        assert_eq!(list.progress(), 0.0);
        for item in CHECKLIST_ITEMS {
            list.toggle(item.id);
        }
        assert_eq!(list.progress(), 100.0);
        assert_eq!(list.summary(), "8 of 8 practices followed");
    }

    #[test]
    fn test_empty_list_progress() {
        assert_eq!(Checklist::new(0).progress(), 0.0);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(StatusTier::from_progress(0.0), StatusTier::CriticalRisk);
        assert_eq!(StatusTier::from_progress(24.9), StatusTier::CriticalRisk);
        assert_eq!(StatusTier::from_progress(25.0), StatusTier::HighRisk);
        assert_eq!(StatusTier::from_progress(49.0).label(), "High Risk");
        assert_eq!(StatusTier::from_progress(50.0).label(), "Moderate Risk");
        assert_eq!(StatusTier::from_progress(75.0), StatusTier::Good);
        assert_eq!(StatusTier::from_progress(99.9), StatusTier::Good);
        assert_eq!(StatusTier::from_progress(100.0).label(), "Excellent Security");
    }

    #[test]
    fn test_tones() {
        assert_eq!(StatusTier::Excellent.tone(), "success");
        assert_eq!(StatusTier::Moderate.tone(), "warning");
        assert_eq!(StatusTier::HighRisk.tone(), "alert");
    }

    #[test]
    fn test_latch_crossing_sequence() {
        let mut latch = CelebrationLatch::default();
        let fired: Vec<bool> = [87.5, 100.0, 100.0, 87.5, 100.0, 100.0]
            .into_iter()
            .map(|p| latch.observe(p))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, true, false]);
    }

    #[test]
    fn test_toggle_reports_completion_once() {
        let mut list = full_list();
        let mut fired = 0;
        for item in CHECKLIST_ITEMS {
            if list.toggle(item.id) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);

        // Drop below and come back
        assert!(!list.toggle(1));
        assert!(list.toggle(1));
    }
}
