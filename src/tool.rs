use egui::Color32;

/// The shape kind that the next pointer press will create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    Line,
    Rectangle,
    Circle,
    #[default]
    Freehand,
}

/// Colors offered as one-click swatches next to the color picker
pub const PALETTE: [Color32; 8] = [
    Color32::BLACK,
    Color32::from_rgb(229, 57, 53),
    Color32::from_rgb(251, 140, 0),
    Color32::from_rgb(253, 216, 53),
    Color32::from_rgb(67, 160, 71),
    Color32::from_rgb(30, 136, 229),
    Color32::from_rgb(142, 68, 173),
    Color32::from_gray(128),
];

impl ToolKind {
    /// Tools in toolbar order
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Freehand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Freehand => "Freehand",
        }
    }

    /// Background color of the tool's toolbar button
    pub fn accent(self) -> Color32 {
        match self {
            ToolKind::Line => Color32::from_rgb(63, 81, 181),
            ToolKind::Rectangle => Color32::from_rgb(142, 68, 173),
            ToolKind::Circle => Color32::from_rgb(39, 174, 96),
            ToolKind::Freehand => Color32::from_rgb(70, 120, 50),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_freehand() {
        assert_eq!(ToolKind::default(), ToolKind::Freehand);
    }

    #[test]
    fn test_toolbar_order() {
        let labels: Vec<&str> = ToolKind::ALL.iter().map(|tool| tool.label()).collect();
        assert_eq!(labels, ["Line", "Rectangle", "Circle", "Freehand"]);
    }

    #[test]
    fn test_accents_are_distinct() {
        for (i, a) in ToolKind::ALL.iter().enumerate() {
            for b in &ToolKind::ALL[i + 1..] {
                assert_ne!(a.accent(), b.accent());
            }
        }
    }
}
