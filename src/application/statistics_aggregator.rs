// Statistics aggregator - Use case for building the statistics view
use crate::application::error::StatisticsError;
use crate::application::fitness_feed::FitnessFeed;
use crate::application::meal_store::MealStore;
use crate::domain::meal::DailyMealRecord;
use crate::domain::reading::{DailyReading, reading_values};
use crate::domain::report::{Charts, StatisticsReport};
use crate::domain::samples::{
    FALLBACK_CALORIES, FALLBACK_CARBS, FALLBACK_FAT, FALLBACK_PROTEIN, FitnessMetric,
    SampleProvider,
};
use crate::domain::series::{
    ChartKind, ChartSeries, FitnessSeries, MACRO_LEGEND, MacroTotals, MetricSeries,
    NutritionSeries, SeriesSource, StackedChart, fit_to_length,
};
use crate::domain::time_range::{DateWindow, TimeRange, date_key, period_title};
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

#[derive(Clone)]
pub struct StatisticsAggregator {
    fitness_feed: Arc<dyn FitnessFeed>,
    meal_store: Arc<dyn MealStore>,
    samples: Arc<dyn SampleProvider>,
    /// Calendar month (1-12) whose missing meal records get placeholder totals
    fallback_month: Option<u32>,
}

impl StatisticsAggregator {
    pub fn new(
        fitness_feed: Arc<dyn FitnessFeed>,
        meal_store: Arc<dyn MealStore>,
        samples: Arc<dyn SampleProvider>,
        fallback_month: Option<u32>,
    ) -> Self {
        Self {
            fitness_feed,
            meal_store,
            samples,
            fallback_month,
        }
    }

    pub fn labels_for(range: TimeRange) -> Vec<String> {
        range.labels()
    }

    /// Fetch everything for `range` and shape it for the charts.
    ///
    /// Fetches run one after another: the three fitness endpoints, then one
    /// meal read per day of the window. Any failure aborts the run.
    pub async fn build_report(
        &self,
        user_id: &str,
        range: TimeRange,
        today: NaiveDate,
    ) -> Result<StatisticsReport, StatisticsError> {
        let calories = self
            .fitness_feed
            .calories()
            .await
            .map_err(StatisticsError::FitnessFeed)?;
        let sleep = self
            .fitness_feed
            .sleep()
            .await
            .map_err(StatisticsError::FitnessFeed)?;
        let steps = self
            .fitness_feed
            .steps()
            .await
            .map_err(StatisticsError::FitnessFeed)?;

        tracing::debug!(
            "Fitness readings for {}: {} calories, {} sleep, {} steps",
            user_id,
            calories.len(),
            sleep.len(),
            steps.len()
        );

        let fitness = self.aggregate_fitness(range, &calories, &sleep, &steps);

        let window = DateWindow::ending(today, range);
        let (nutrition, meals) = self.aggregate_nutrition(range, user_id, window).await?;
        debug_assert!(fitness.is_aligned() && nutrition.is_aligned());

        let charts = Charts {
            calories_burned: self.chart_series(ChartKind::CaloriesBurned, &fitness.calories, range),
            calories_intake: self.chart_series(
                ChartKind::CaloriesIntake,
                &MetricSeries::new(nutrition.calories_intake.clone(), nutrition_source(&nutrition)),
                range,
            ),
            macros: self.stacked_macro_chart(&nutrition, range),
        };

        Ok(StatisticsReport::new(
            range,
            period_title(today),
            fitness,
            nutrition,
            meals,
            charts,
        ))
    }

    /// Map feed readings onto the range's buckets.
    ///
    /// A metric with no readings is filled from the sample provider. Water has
    /// no feed and is always a sample.
    pub fn aggregate_fitness(
        &self,
        range: TimeRange,
        calories: &[DailyReading],
        sleep: &[DailyReading],
        steps: &[DailyReading],
    ) -> FitnessSeries {
        let labels = Self::labels_for(range);

        FitnessSeries {
            calories: self.fitness_metric(FitnessMetric::Calories, calories, range),
            sleep: self.fitness_metric(FitnessMetric::Sleep, sleep, range),
            steps: self.fitness_metric(FitnessMetric::Steps, steps, range),
            water: self.fitness_metric(FitnessMetric::Water, &[], range),
            labels,
        }
    }

    fn fitness_metric(
        &self,
        metric: FitnessMetric,
        readings: &[DailyReading],
        range: TimeRange,
    ) -> MetricSeries {
        let n = range.point_count();

        if !readings.is_empty() {
            return MetricSeries::new(
                fit_to_length(reading_values(readings), n),
                SeriesSource::Recorded,
            );
        }

        match self.samples.draw_series(metric.sample_bounds(range), n) {
            Some(values) => {
                tracing::debug!("No {} readings, using {} samples", metric.name(), n);
                MetricSeries::new(values, SeriesSource::Sample)
            }
            None => MetricSeries::new(vec![0.0; n], SeriesSource::Empty),
        }
    }

    /// Per-day macro totals for every date of `window`, oldest first.
    ///
    /// Returns the series (reconciled to the label count) and the meal
    /// records that were actually found.
    pub async fn aggregate_nutrition(
        &self,
        range: TimeRange,
        user_id: &str,
        window: DateWindow,
    ) -> Result<(NutritionSeries, Vec<DailyMealRecord>), StatisticsError> {
        let labels = Self::labels_for(range);
        let mut series = NutritionSeries::default();
        let mut meals = Vec::new();

        tracing::debug!(
            "Reading {} days of meal records for {} from {}",
            window.day_count(),
            user_id,
            date_key(window.start)
        );

        for (slot, date) in window.dates().take(labels.len()).enumerate() {
            let record = self
                .meal_store
                .get_meal_record(user_id, date)
                .await
                .map_err(|source| StatisticsError::MealStore { date, source })?;

            let totals = match record {
                Some(record) => {
                    tracing::debug!("Found meal data for {}", record.date);
                    let totals = record.totals();
                    meals.push(record);
                    totals
                }
                None => {
                    tracing::debug!("No meal data found for {}", date_key(date));
                    match self.fallback_totals(date) {
                        Some(totals) => {
                            series.sampled_days += 1;
                            totals
                        }
                        None => MacroTotals::default(),
                    }
                }
            };

            series.push(totals, labels[slot].clone());
        }

        series.reconcile(&labels);

        Ok((series, meals))
    }

    fn fallback_totals(&self, date: NaiveDate) -> Option<MacroTotals> {
        if self.fallback_month != Some(date.month()) {
            return None;
        }

        Some(MacroTotals {
            protein: self.samples.draw(FALLBACK_PROTEIN)?,
            fat: self.samples.draw(FALLBACK_FAT)?,
            carbs: self.samples.draw(FALLBACK_CARBS)?,
            calories: self.samples.draw(FALLBACK_CALORIES)?,
        })
    }

    /// Single-metric bar chart: the series itself, or a fixed sample when
    /// the series is empty, forced to the label count.
    pub fn chart_series(&self, kind: ChartKind, raw: &MetricSeries, range: TimeRange) -> ChartSeries {
        let labels = Self::labels_for(range);

        let (values, source) = if !raw.values.is_empty() {
            (raw.values.clone(), raw.source)
        } else {
            match self.samples.chart_sample(kind, range) {
                Some(sample) => (sample, SeriesSource::Sample),
                None => (Vec::new(), SeriesSource::Empty),
            }
        };

        ChartSeries {
            kind,
            values: fit_to_length(values, labels.len()),
            labels,
            source,
        }
    }

    /// Protein, fat and carbs stacked per label
    pub fn stacked_macro_chart(&self, nutrition: &NutritionSeries, range: TimeRange) -> StackedChart {
        let labels = Self::labels_for(range);
        let n = labels.len();

        let recorded = !nutrition.protein.is_empty()
            && !nutrition.fat.is_empty()
            && !nutrition.carbs.is_empty();

        let ([protein, fat, carbs], source) = if recorded {
            (
                [
                    nutrition.protein.clone(),
                    nutrition.fat.clone(),
                    nutrition.carbs.clone(),
                ],
                nutrition_source(nutrition),
            )
        } else {
            match self.samples.macro_sample(range) {
                Some(sample) => (sample, SeriesSource::Sample),
                None => ([Vec::new(), Vec::new(), Vec::new()], SeriesSource::Empty),
            }
        };

        let protein = fit_to_length(protein, n);
        let fat = fit_to_length(fat, n);
        let carbs = fit_to_length(carbs, n);

        let data = (0..n).map(|i| [protein[i], fat[i], carbs[i]]).collect();

        StackedChart {
            labels,
            data,
            legend: MACRO_LEGEND,
            source,
        }
    }
}

fn nutrition_source(nutrition: &NutritionSeries) -> SeriesSource {
    if nutrition.sampled_days > 0 {
        SeriesSource::Sample
    } else {
        SeriesSource::Recorded
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::meal::MealEntry;
    use crate::domain::samples::{LowerBoundSamples, NoSampleProvider, RandomSampleProvider};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct MockFitnessFeed {
        pub calories: Vec<DailyReading>,
        pub sleep: Vec<DailyReading>,
        pub steps: Vec<DailyReading>,
        pub fail: bool,
    }

    #[async_trait]
    impl FitnessFeed for MockFitnessFeed {
        async fn calories(&self) -> anyhow::Result<Vec<DailyReading>> {
            if self.fail {
                anyhow::bail!("Failed to fetch calories: 503 Service Unavailable");
            }
            Ok(self.calories.clone())
        }

        async fn sleep(&self) -> anyhow::Result<Vec<DailyReading>> {
            Ok(self.sleep.clone())
        }

        async fn steps(&self) -> anyhow::Result<Vec<DailyReading>> {
            Ok(self.steps.clone())
        }
    }

    #[derive(Default)]
    pub struct MockMealStore {
        pub records: HashMap<NaiveDate, DailyMealRecord>,
        pub fail_on: Option<NaiveDate>,
        pub reads: AtomicUsize,
        pub requested: Mutex<Vec<NaiveDate>>,
    }

    #[async_trait]
    impl MealStore for MockMealStore {
        async fn get_meal_record(
            &self,
            _user_id: &str,
            date: NaiveDate,
        ) -> anyhow::Result<Option<DailyMealRecord>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push(date);
            if self.fail_on == Some(date) {
                anyhow::bail!("store unavailable");
            }
            Ok(self.records.get(&date).cloned())
        }
    }

    pub fn meal(protein: f64, fat: f64, carbs: f64, calories: f64) -> MealEntry {
        MealEntry {
            calories,
            carbs,
            fat,
            protein,
            food: "rice".to_string(),
        }
    }

    pub fn record(date: NaiveDate) -> DailyMealRecord {
        DailyMealRecord::new(
            date_key(date),
            meal(20.0, 10.0, 50.0, 400.0),
            meal(30.0, 15.0, 60.0, 600.0),
            meal(25.0, 20.0, 55.0, 700.0),
        )
    }

    fn readings(values: &[f64]) -> Vec<DailyReading> {
        values
            .iter()
            .map(|v| DailyReading::new(None, *v))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn aggregator(
        feed: MockFitnessFeed,
        store: Arc<MockMealStore>,
        samples: Arc<dyn SampleProvider>,
        fallback_month: Option<u32>,
    ) -> StatisticsAggregator {
        StatisticsAggregator::new(Arc::new(feed), store, samples, fallback_month)
    }

    const RANGES: [TimeRange; 3] = [TimeRange::Day, TimeRange::Week, TimeRange::Month];

    #[test]
    fn test_fitness_readings_are_padded() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(RandomSampleProvider),
            None,
        );

        let fitness = agg.aggregate_fitness(
            TimeRange::Day,
            &readings(&[2100.0, 1950.5, 2300.0]),
            &[],
            &[],
        );

        assert!(fitness.is_aligned());
        assert_eq!(fitness.labels.len(), 6);
        assert_eq!(
            fitness.calories.values,
            vec![2100.0, 1950.5, 2300.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(fitness.calories.source, SeriesSource::Recorded);
        assert_eq!(fitness.sleep.source, SeriesSource::Sample);
    }

    #[test]
    fn test_fitness_readings_are_truncated() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(NoSampleProvider),
            None,
        );
        let many: Vec<f64> = (0..10).map(|i| i as f64 * 1000.0).collect();

        let fitness = agg.aggregate_fitness(TimeRange::Week, &[], &[], &readings(&many));

        assert_eq!(fitness.steps.values, many[..7].to_vec());
        assert_eq!(fitness.calories.values, vec![0.0; 7]);
        assert_eq!(fitness.calories.source, SeriesSource::Empty);
    }

    #[test]
    fn test_fitness_samples_stay_in_bounds() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(RandomSampleProvider),
            None,
        );

        for range in RANGES {
            let fitness = agg.aggregate_fitness(range, &[], &[], &[]);
            assert!(fitness.is_aligned());
            assert_eq!(fitness.labels.len(), range.point_count());

            let checks = [
                (FitnessMetric::Calories, &fitness.calories),
                (FitnessMetric::Sleep, &fitness.sleep),
                (FitnessMetric::Steps, &fitness.steps),
                (FitnessMetric::Water, &fitness.water),
            ];
            for (metric, series) in checks {
                let bounds = metric.sample_bounds(range);
                assert_eq!(series.source, SeriesSource::Sample);
                assert!(series.values.iter().all(|v| bounds.contains(*v)));
            }
        }
    }

    #[tokio::test]
    async fn test_week_without_records_is_all_zero() {
        let store = Arc::new(MockMealStore::default());
        let agg = aggregator(
            MockFitnessFeed::default(),
            store.clone(),
            Arc::new(RandomSampleProvider),
            Some(2),
        );
        let window = DateWindow::ending(date(2026, 10, 16), TimeRange::Week);

        let (nutrition, meals) = agg
            .aggregate_nutrition(TimeRange::Week, "user-1", window)
            .await
            .unwrap();

        assert!(meals.is_empty());
        assert_eq!(nutrition.protein, vec![0.0; 7]);
        assert_eq!(nutrition.fat, vec![0.0; 7]);
        assert_eq!(nutrition.carbs, vec![0.0; 7]);
        assert_eq!(nutrition.calories_intake, vec![0.0; 7]);
        assert_eq!(
            nutrition.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(nutrition.sampled_days, 0);
        assert_eq!(store.reads.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_dates_are_read_oldest_first() {
        let store = Arc::new(MockMealStore::default());
        let agg = aggregator(
            MockFitnessFeed::default(),
            store.clone(),
            Arc::new(NoSampleProvider),
            None,
        );
        let today = date(2026, 10, 16);

        agg.aggregate_nutrition(TimeRange::Week, "user-1", DateWindow::ending(today, TimeRange::Week))
            .await
            .unwrap();

        let requested = store.requested.lock().unwrap().clone();
        assert_eq!(requested.first(), Some(&date(2026, 10, 10)));
        assert_eq!(requested.last(), Some(&today));
        assert!(requested.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_recorded_days_are_summed() {
        let today = date(2026, 10, 16);
        let mut store = MockMealStore::default();
        store.records.insert(today, record(today));
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(store),
            Arc::new(NoSampleProvider),
            None,
        );

        let (nutrition, meals) = agg
            .aggregate_nutrition(TimeRange::Day, "user-1", DateWindow::ending(today, TimeRange::Day))
            .await
            .unwrap();

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].date, "2026-10-16");
        assert!(nutrition.is_aligned());
        assert_eq!(nutrition.protein, vec![75.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(nutrition.fat[0], 45.0);
        assert_eq!(nutrition.carbs[0], 165.0);
        assert_eq!(nutrition.calories_intake[0], 1700.0);
        assert_eq!(nutrition.labels, TimeRange::Day.labels());
    }

    #[tokio::test]
    async fn test_fallback_month_days_stay_in_bounds() {
        let store = Arc::new(MockMealStore::default());
        let agg = aggregator(
            MockFitnessFeed::default(),
            store,
            Arc::new(RandomSampleProvider),
            Some(2),
        );
        // 2026-02-14 .. 2026-03-15: 15 February days, then 15 March days
        let today = date(2026, 3, 15);

        let (nutrition, _) = agg
            .aggregate_nutrition(TimeRange::Month, "user-1", DateWindow::ending(today, TimeRange::Month))
            .await
            .unwrap();

        assert_eq!(nutrition.len(), 30);
        assert_eq!(nutrition.sampled_days, 15);
        for i in 0..15 {
            assert!(FALLBACK_PROTEIN.contains(nutrition.protein[i]));
            assert!(FALLBACK_FAT.contains(nutrition.fat[i]));
            assert!(FALLBACK_CARBS.contains(nutrition.carbs[i]));
            assert!(FALLBACK_CALORIES.contains(nutrition.calories_intake[i]));
        }
        for i in 15..30 {
            assert_eq!(nutrition.protein[i], 0.0);
            assert_eq!(nutrition.calories_intake[i], 0.0);
        }
    }

    #[tokio::test]
    async fn test_full_month_of_records_needs_no_padding() {
        let today = date(2026, 10, 16);
        let window = DateWindow::ending(today, TimeRange::Month);
        let mut store = MockMealStore::default();
        for d in window.dates() {
            store.records.insert(d, record(d));
        }
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(store),
            Arc::new(LowerBoundSamples),
            Some(10),
        );

        let (nutrition, meals) = agg
            .aggregate_nutrition(TimeRange::Month, "user-1", window)
            .await
            .unwrap();

        assert_eq!(meals.len(), 30);
        assert_eq!(nutrition.len(), 30);
        assert_eq!(nutrition.sampled_days, 0);
        assert!(nutrition.calories_intake.iter().all(|c| *c == 1700.0));
        assert_eq!(nutrition.labels, TimeRange::Month.labels());
    }

    #[tokio::test]
    async fn test_store_failure_aborts_run() {
        let today = date(2026, 10, 16);
        let store = Arc::new(MockMealStore {
            fail_on: Some(date(2026, 10, 12)),
            ..Default::default()
        });
        let agg = aggregator(
            MockFitnessFeed::default(),
            store.clone(),
            Arc::new(NoSampleProvider),
            None,
        );

        let err = agg
            .aggregate_nutrition(TimeRange::Week, "user-1", DateWindow::ending(today, TimeRange::Week))
            .await
            .unwrap_err();

        match err {
            StatisticsError::MealStore { date: failed, .. } => assert_eq!(failed, date(2026, 10, 12)),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_chart_uses_sample_when_empty() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(RandomSampleProvider),
            None,
        );
        let empty = MetricSeries::new(Vec::new(), SeriesSource::Empty);

        let burned = agg.chart_series(ChartKind::CaloriesBurned, &empty, TimeRange::Day);
        assert_eq!(burned.values, vec![250.0, 300.0, 200.0, 280.0, 260.0, 300.0]);
        assert_eq!(burned.source, SeriesSource::Sample);

        let intake = agg.chart_series(ChartKind::CaloriesIntake, &empty, TimeRange::Week);
        assert_eq!(
            intake.values,
            vec![1800.0, 2100.0, 1950.0, 2000.0, 1800.0, 2200.0, 1900.0]
        );

        let month = agg.chart_series(ChartKind::CaloriesIntake, &empty, TimeRange::Month);
        assert_eq!(month.values.len(), 30);
        assert!(month.values.iter().all(|v| FALLBACK_CALORIES.contains(*v)));
    }

    #[test]
    fn test_chart_values_match_labels() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(NoSampleProvider),
            None,
        );
        let short = MetricSeries::new(vec![1.0, 2.0], SeriesSource::Recorded);
        let long = MetricSeries::new(vec![5.0; 40], SeriesSource::Recorded);

        for range in RANGES {
            let padded = agg.chart_series(ChartKind::CaloriesBurned, &short, range);
            assert_eq!(padded.values.len(), padded.labels.len());
            assert_eq!(&padded.values[..2], &[1.0, 2.0]);
            assert!(padded.values[2..].iter().all(|v| *v == 0.0));

            let truncated = agg.chart_series(ChartKind::CaloriesBurned, &long, range);
            assert_eq!(truncated.values, vec![5.0; range.point_count()]);
        }

        let empty = MetricSeries::new(Vec::new(), SeriesSource::Empty);
        let chart = agg.chart_series(ChartKind::CaloriesBurned, &empty, TimeRange::Day);
        assert_eq!(chart.values, vec![0.0; 6]);
        assert_eq!(chart.source, SeriesSource::Empty);
    }

    #[test]
    fn test_stacked_chart_interleaves_macros() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(NoSampleProvider),
            None,
        );
        let nutrition = NutritionSeries {
            protein: vec![60.0, 70.0],
            fat: vec![40.0, 45.0],
            carbs: vec![150.0, 180.0],
            calories_intake: vec![1800.0, 1900.0],
            labels: vec!["Mon".to_string(), "Tue".to_string()],
            sampled_days: 0,
        };

        let chart = agg.stacked_macro_chart(&nutrition, TimeRange::Week);

        assert_eq!(chart.labels.len(), 7);
        assert_eq!(chart.data.len(), 7);
        assert_eq!(chart.data[0], [60.0, 40.0, 150.0]);
        assert_eq!(chart.data[1], [70.0, 45.0, 180.0]);
        assert_eq!(chart.data[6], [0.0, 0.0, 0.0]);
        assert_eq!(chart.legend, ["Protein", "Fat", "Carbs"]);
        assert_eq!(chart.source, SeriesSource::Recorded);
    }

    #[test]
    fn test_stacked_chart_sample_when_any_macro_missing() {
        let agg = aggregator(
            MockFitnessFeed::default(),
            Arc::new(MockMealStore::default()),
            Arc::new(RandomSampleProvider),
            None,
        );
        let nutrition = NutritionSeries {
            protein: vec![60.0],
            ..Default::default()
        };

        let chart = agg.stacked_macro_chart(&nutrition, TimeRange::Day);

        assert_eq!(chart.source, SeriesSource::Sample);
        assert_eq!(chart.data[0], [20.0, 15.0, 60.0]);
        assert_eq!(chart.data[5], [25.0, 19.0, 65.0]);
    }

    #[tokio::test]
    async fn test_report_for_day_with_three_calorie_readings() {
        let today = date(2026, 10, 16);
        let feed = MockFitnessFeed {
            calories: readings(&[2100.0, 1980.0, 2250.0]),
            ..Default::default()
        };
        let agg = aggregator(
            feed,
            Arc::new(MockMealStore::default()),
            Arc::new(LowerBoundSamples),
            None,
        );

        let report = agg.build_report("user-1", TimeRange::Day, today).await.unwrap();

        assert_eq!(report.title, "October 2026");
        assert_eq!(report.period, "Daily");
        assert_eq!(
            report.fitness.calories.values,
            vec![2100.0, 1980.0, 2250.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(report.charts.calories_burned.values, report.fitness.calories.values);
        assert_eq!(report.fitness.sleep.values, vec![6.0; 6]);
        assert_eq!(report.nutrition.len(), 6);
        assert_eq!(report.charts.macros.data.len(), 6);
        assert_eq!(report.charts.calories_intake.values, vec![0.0; 6]);
    }

    #[tokio::test]
    async fn test_every_series_is_aligned_for_every_range() {
        let today = date(2026, 2, 10);
        for range in RANGES {
            let feed = MockFitnessFeed {
                steps: readings(&[8000.0, 9000.0]),
                ..Default::default()
            };
            let agg = aggregator(
                feed,
                Arc::new(MockMealStore::default()),
                Arc::new(RandomSampleProvider),
                Some(2),
            );

            let report = agg.build_report("user-1", range, today).await.unwrap();
            let n = range.point_count();

            assert!(report.fitness.is_aligned());
            assert!(report.nutrition.is_aligned());
            assert_eq!(report.fitness.labels.len(), n);
            assert_eq!(report.nutrition.labels.len(), n);
            assert_eq!(report.charts.calories_burned.values.len(), n);
            assert_eq!(report.charts.calories_intake.values.len(), n);
            assert_eq!(report.charts.macros.data.len(), n);
        }
    }

    #[tokio::test]
    async fn test_feed_failure_aborts_report() {
        let store = Arc::new(MockMealStore::default());
        let feed = MockFitnessFeed {
            fail: true,
            ..Default::default()
        };
        let agg = aggregator(feed, store.clone(), Arc::new(NoSampleProvider), None);

        let err = agg
            .build_report("user-1", TimeRange::Week, date(2026, 10, 16))
            .await
            .unwrap_err();

        assert!(matches!(err, StatisticsError::FitnessFeed(_)));
        assert_eq!(err.user_message(), "Failed to load data. Please try again.");
        assert_eq!(store.reads.load(Ordering::SeqCst), 0);
    }
}
