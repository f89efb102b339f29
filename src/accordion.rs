//! Accordion State
//!
//! Single-open, collapsible: opening one item closes the other, clicking the
//! open item closes it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut acc = Accordion::default();
        assert_eq!(acc, Accordion::default());

        acc.toggle(2);
        assert!(acc.is_open(2));

        acc.toggle(4);
        assert!(acc.is_open(4));
        assert!(!acc.is_open(2));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let mut acc = Accordion::default();
        acc.toggle(1);
        acc.toggle(1);
        assert!(!acc.is_open(1));
        assert_eq!(acc, Accordion::default());
    }
}
