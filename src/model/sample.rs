/// Values of one array at a fixed gene-id, indexed `[mouse][day]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneSlice {
    pub values: Vec<Vec<Option<f64>>>,
}

impl GeneSlice {
    pub fn n_mice(&self) -> usize {
        self.values.len()
    }

    pub fn n_days(&self) -> usize {
        self.values.first().map(|row| row.len()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongFormSample {
    pub mouse: usize,
    pub day: usize,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPoint {
    pub mouse: usize,
    pub day: u32,
    pub ratio: f64,
    pub ratio_var: f64,
    pub sd: f64,
    pub ratio_min: f64,
    pub ratio_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsFitnessPoint {
    pub mouse: usize,
    pub day: u32,
    pub abs_fitness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseVariancePoint {
    pub mouse: usize,
    pub day: u32,
    pub abs_fitness_var: f64,
    /// `None` when the variance is zero; such points are never drawn.
    pub inverse_var: Option<f64>,
}
