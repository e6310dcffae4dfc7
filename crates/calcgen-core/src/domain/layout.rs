//! Button grid layout plans for GUI calculators.
//!
//! A layout plan is an explicit value: every logical button with its grid
//! coordinates. The desktop renderer turns placements into grid calls; the
//! tests read the plan directly instead of parsing generated text.

/// A logical calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKey {
    Digit(u8),
    Decimal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    ClearEntry,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
}

impl ButtonKey {
    /// The label shown on the button face.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(0) => "0",
            Self::Digit(1) => "1",
            Self::Digit(2) => "2",
            Self::Digit(3) => "3",
            Self::Digit(4) => "4",
            Self::Digit(5) => "5",
            Self::Digit(6) => "6",
            Self::Digit(7) => "7",
            Self::Digit(8) => "8",
            Self::Digit(_) => "9",
            Self::Decimal => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::MemoryStore => "MS",
            Self::MemoryRecall => "MR",
            Self::MemoryClear => "MC",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }
}

/// One button at one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub key: ButtonKey,
    pub row: u8,
    pub column: u8,
    /// Number of columns the button spans (1 for almost everything).
    pub span: u8,
}

/// A complete button grid for one blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub columns: u8,
    placements: Vec<Placement>,
}

impl LayoutPlan {
    pub fn new(columns: u8) -> Self {
        Self {
            columns,
            placements: Vec::new(),
        }
    }

    pub fn place(&mut self, key: ButtonKey, row: u8, column: u8) {
        self.place_span(key, row, column, 1);
    }

    pub fn place_span(&mut self, key: ButtonKey, row: u8, column: u8, span: u8) {
        self.placements.push(Placement {
            key,
            row,
            column,
            span,
        });
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of grid rows the plan occupies.
    pub fn rows(&self) -> u8 {
        self.placements
            .iter()
            .map(|p| p.row + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn find(&self, key: ButtonKey) -> Option<&Placement> {
        self.placements.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: ButtonKey) -> bool {
        self.find(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_tracks_the_deepest_placement() {
        let mut plan = LayoutPlan::new(4);
        assert_eq!(plan.rows(), 0);
        plan.place(ButtonKey::Digit(7), 0, 0);
        plan.place_span(ButtonKey::Equals, 5, 0, 4);
        assert_eq!(plan.rows(), 6);
    }

    #[test]
    fn find_locates_a_button() {
        let mut plan = LayoutPlan::new(4);
        plan.place(ButtonKey::Sin, 1, 0);
        let placement = plan.find(ButtonKey::Sin).unwrap();
        assert_eq!((placement.row, placement.column, placement.span), (1, 0, 1));
        assert!(!plan.contains(ButtonKey::Cos));
    }

    #[test]
    fn digit_labels_cover_all_ten() {
        for digit in 0..10u8 {
            assert_eq!(
                ButtonKey::Digit(digit).label(),
                digit.to_string().as_str()
            );
        }
    }

    #[test]
    fn operator_labels_use_display_glyphs() {
        assert_eq!(ButtonKey::Multiply.label(), "×");
        assert_eq!(ButtonKey::Divide.label(), "÷");
    }
}
