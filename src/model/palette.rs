use crate::model::summary::Phenotype;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Line,
    Bar,
}

/// Three fixed mouse colors; every other index gets the style's fallback.
pub fn mouse_color(mouse: usize, style: ChartStyle) -> &'static str {
    match mouse {
        0 => "red",
        1 => "blue",
        2 => "green",
        _ => match style {
            ChartStyle::Line => "black",
            ChartStyle::Bar => "gray",
        },
    }
}

/// Overview color for phenotype labels outside the known set.
pub const OTHER_PHENOTYPE_COLOR: &str = "#7F7F7F";

pub fn phenotype_color(phenotype: &Phenotype) -> &'static str {
    match phenotype {
        Phenotype::Slow => "#636EFA",
        Phenotype::Essential => "#EF553B",
        Phenotype::Dispensable => "#00CC96",
        Phenotype::InsufficientData => "#000000",
        Phenotype::Fast => "#FFC0CB",
        Phenotype::Other(_) => OTHER_PHENOTYPE_COLOR,
    }
}

/// Marker color for a highlighted gene whose phenotype has no overview trace.
pub const HIGHLIGHT_FALLBACK_COLOR: &str = "blue";
