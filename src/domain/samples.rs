// Placeholder values shown when no recorded data exists
use super::series::ChartKind;
use super::time_range::TimeRange;
use rand::Rng;

/// Half-open integral range `[low, high)` a placeholder value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBounds {
    pub low: u32,
    pub high: u32,
}

impl SampleBounds {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low as f64 && value < self.high as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessMetric {
    Calories,
    Sleep,
    Steps,
    Water,
}

impl FitnessMetric {
    pub fn name(&self) -> &'static str {
        match self {
            FitnessMetric::Calories => "calories",
            FitnessMetric::Sleep => "sleep",
            FitnessMetric::Steps => "steps",
            FitnessMetric::Water => "water",
        }
    }

    pub fn sample_bounds(&self, range: TimeRange) -> SampleBounds {
        match (self, range) {
            (FitnessMetric::Calories, TimeRange::Day) => SampleBounds::new(200, 300),
            (FitnessMetric::Calories, _) => SampleBounds::new(1700, 2000),
            (FitnessMetric::Sleep, TimeRange::Day) => SampleBounds::new(6, 8),
            (FitnessMetric::Sleep, _) => SampleBounds::new(5, 8),
            (FitnessMetric::Steps, TimeRange::Day) => SampleBounds::new(1000, 3000),
            (FitnessMetric::Steps, _) => SampleBounds::new(5000, 10000),
            (FitnessMetric::Water, TimeRange::Day) => SampleBounds::new(500, 1000),
            (FitnessMetric::Water, _) => SampleBounds::new(1500, 2500),
        }
    }
}

/// Bounds for a fallback-month day with no meal record
pub const FALLBACK_PROTEIN: SampleBounds = SampleBounds::new(50, 80);
pub const FALLBACK_FAT: SampleBounds = SampleBounds::new(40, 60);
pub const FALLBACK_CARBS: SampleBounds = SampleBounds::new(150, 200);
pub const FALLBACK_CALORIES: SampleBounds = SampleBounds::new(1700, 2000);

const CALORIE_SAMPLE_WEEK: [f64; 7] = [1800.0, 2100.0, 1950.0, 2000.0, 1800.0, 2200.0, 1900.0];
const BURNED_SAMPLE_DAY: [f64; 6] = [250.0, 300.0, 200.0, 280.0, 260.0, 300.0];
const INTAKE_SAMPLE_DAY: [f64; 6] = [400.0, 600.0, 500.0, 450.0, 350.0, 300.0];

const PROTEIN_SAMPLE_DAY: [f64; 6] = [20.0, 25.0, 30.0, 15.0, 20.0, 25.0];
const FAT_SAMPLE_DAY: [f64; 6] = [15.0, 20.0, 18.0, 22.0, 17.0, 19.0];
const CARBS_SAMPLE_DAY: [f64; 6] = [60.0, 70.0, 65.0, 80.0, 75.0, 65.0];
const PROTEIN_SAMPLE_WEEK: [f64; 7] = [60.0, 65.0, 70.0, 55.0, 68.0, 72.0, 63.0];
const FAT_SAMPLE_WEEK: [f64; 7] = [45.0, 50.0, 48.0, 52.0, 47.0, 49.0, 46.0];
const CARBS_SAMPLE_WEEK: [f64; 7] = [180.0, 190.0, 175.0, 200.0, 185.0, 195.0, 188.0];

/// Source of placeholder values.
///
/// `draw` returns `None` when placeholders are switched off; callers then
/// fall back to zeros.
pub trait SampleProvider: Send + Sync {
    fn draw(&self, bounds: SampleBounds) -> Option<f64>;

    fn draw_series(&self, bounds: SampleBounds, len: usize) -> Option<Vec<f64>> {
        (0..len).map(|_| self.draw(bounds)).collect()
    }

    /// Fixed sample for a single-metric chart
    fn chart_sample(&self, kind: ChartKind, range: TimeRange) -> Option<Vec<f64>> {
        match (kind, range) {
            (ChartKind::CaloriesBurned, TimeRange::Day) => Some(BURNED_SAMPLE_DAY.to_vec()),
            (ChartKind::CaloriesIntake, TimeRange::Day) => Some(INTAKE_SAMPLE_DAY.to_vec()),
            (_, TimeRange::Week) => Some(CALORIE_SAMPLE_WEEK.to_vec()),
            (_, TimeRange::Month) => self.draw_series(FALLBACK_CALORIES, range.point_count()),
        }
    }

    /// Fixed protein, fat and carbs samples for the stacked chart
    fn macro_sample(&self, range: TimeRange) -> Option<[Vec<f64>; 3]> {
        match range {
            TimeRange::Day => Some([
                PROTEIN_SAMPLE_DAY.to_vec(),
                FAT_SAMPLE_DAY.to_vec(),
                CARBS_SAMPLE_DAY.to_vec(),
            ]),
            TimeRange::Week => Some([
                PROTEIN_SAMPLE_WEEK.to_vec(),
                FAT_SAMPLE_WEEK.to_vec(),
                CARBS_SAMPLE_WEEK.to_vec(),
            ]),
            TimeRange::Month => {
                let n = range.point_count();
                Some([
                    self.draw_series(FALLBACK_PROTEIN, n)?,
                    self.draw_series(FALLBACK_FAT, n)?,
                    self.draw_series(FALLBACK_CARBS, n)?,
                ])
            }
        }
    }
}

/// Uniform integral draws from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampleProvider;

impl SampleProvider for RandomSampleProvider {
    fn draw(&self, bounds: SampleBounds) -> Option<f64> {
        if bounds.high <= bounds.low {
            return Some(bounds.low as f64);
        }
        Some(rand::thread_rng().gen_range(bounds.low..bounds.high) as f64)
    }
}

/// Placeholders disabled: every gap stays zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSampleProvider;

impl SampleProvider for NoSampleProvider {
    fn draw(&self, _bounds: SampleBounds) -> Option<f64> {
        None
    }

    fn chart_sample(&self, _kind: ChartKind, _range: TimeRange) -> Option<Vec<f64>> {
        None
    }

    fn macro_sample(&self, _range: TimeRange) -> Option<[Vec<f64>; 3]> {
        None
    }
}

/// Deterministic provider for tests: always the lower bound
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerBoundSamples;

#[cfg(test)]
impl SampleProvider for LowerBoundSamples {
    fn draw(&self, bounds: SampleBounds) -> Option<f64> {
        Some(bounds.low as f64)
    }
}
