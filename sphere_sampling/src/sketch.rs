use itertools::Itertools as _;

use crate::{
    Config, PointCloudSink, PointSet, SamplingError, SamplingMethod, Samplers, ViewLayout,
    project_to_sphere,
};

/// Order in which point sets are generated & logged for each sample count.
const GENERATION_ORDER: [SamplingMethod; 3] = [
    SamplingMethod::Halton,
    SamplingMethod::Pcg,
    SamplingMethod::Random,
];

/// Generates points with every method at every configured sample count and hands them to `sink`.
///
/// Repeated sample counts are only generated once, every label is logged at most once.
/// Bails on the first error, no partial results are retried.
pub fn run_sketch(config: &Config, sink: &mut impl PointCloudSink) -> Result<(), SamplingError> {
    sink.send_layout(&ViewLayout::grid(
        &config.sample_counts,
        &SamplingMethod::ALL,
    ));

    let mut samplers = Samplers::new(config.pcg_seed, config.uniform_seed);

    for (&num_samples, method) in config
        .sample_counts
        .iter()
        .unique()
        .cartesian_product(GENERATION_ORDER)
    {
        let samples = samplers.sample_pairs(method, num_samples)?;
        let positions = project_to_sphere(&samples)?;

        let label = method.label(num_samples);
        log::debug!("Generated {} points for {label}", positions.len());

        sink.log_points(PointSet {
            label,
            positions,
            color: config.point_color,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSink;

    fn seeded_config() -> Config {
        Config {
            uniform_seed: Some(5),
            ..Config::default()
        }
    }

    #[test]
    fn logs_every_method_at_every_count() {
        let mut sink = RecordingSink::default();
        run_sketch(&seeded_config(), &mut sink).unwrap();

        assert_eq!(sink.layouts.len(), 1);
        let labels: Vec<_> = sink.point_sets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "halton_1024",
                "pcg_1024",
                "random_1024",
                "halton_2048",
                "pcg_2048",
                "random_2048",
            ]
        );

        for set in &sink.point_sets {
            assert!(sink.layouts[0].cell_of(&set.label).is_some());
            assert_eq!(set.color, crate::DEFAULT_POINT_COLOR);
        }
        assert_eq!(sink.point_set("pcg_1024").unwrap().positions.len(), 1024);
        assert_eq!(sink.point_set("halton_2048").unwrap().positions.len(), 2048);
    }

    #[test]
    fn all_points_on_unit_sphere() {
        let mut sink = RecordingSink::default();
        run_sketch(&seeded_config(), &mut sink).unwrap();

        for set in &sink.point_sets {
            for p in &set.positions {
                assert!(
                    (p.length() - 1.0).abs() < 1e-9,
                    "{}: {p} is not on the unit sphere",
                    set.label
                );
            }
        }
    }

    #[test]
    fn reproducible_with_seeds() {
        let mut a = RecordingSink::default();
        let mut b = RecordingSink::default();
        run_sketch(&seeded_config(), &mut a).unwrap();
        run_sketch(&seeded_config(), &mut b).unwrap();
        assert_eq!(a.point_sets, b.point_sets);
    }

    #[test]
    fn pcg_stream_continues_across_counts() {
        let config = Config {
            sample_counts: vec![4, 8],
            ..seeded_config()
        };
        let mut sink = RecordingSink::default();
        run_sketch(&config, &mut sink).unwrap();

        let first = &sink.point_set("pcg_4").unwrap().positions;
        let second = &sink.point_set("pcg_8").unwrap().positions;
        assert_ne!(first[..], second[..4]);
    }

    #[test]
    fn repeated_counts_are_generated_once() {
        let config = Config {
            sample_counts: vec![4, 4, 8, 4],
            ..seeded_config()
        };
        let mut sink = RecordingSink::default();
        run_sketch(&config, &mut sink).unwrap();

        let labels: Vec<_> = sink.point_sets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["halton_4", "pcg_4", "random_4", "halton_8", "pcg_8", "random_8"]
        );
        assert_eq!(sink.layouts[0].num_rows(), 2);
        for set in &sink.point_sets {
            assert!(sink.layouts[0].cell_of(&set.label).is_some());
        }
    }

    #[derive(Debug, PartialEq)]
    enum SinkCall {
        Layout,
        Points(String),
    }

    #[derive(Default)]
    struct CallOrderSink {
        calls: Vec<SinkCall>,
    }

    impl PointCloudSink for CallOrderSink {
        fn send_layout(&mut self, _layout: &ViewLayout) {
            self.calls.push(SinkCall::Layout);
        }

        fn log_points(&mut self, points: PointSet) {
            self.calls.push(SinkCall::Points(points.label));
        }
    }

    #[test]
    fn layout_is_sent_before_points() {
        let mut sink = CallOrderSink::default();
        run_sketch(&seeded_config(), &mut sink).unwrap();

        assert_eq!(sink.calls.first(), Some(&SinkCall::Layout));
        let labels: Vec<_> = sink.calls[1..]
            .iter()
            .map(|call| match call {
                SinkCall::Points(label) => label.as_str(),
                SinkCall::Layout => panic!("layout sent more than once"),
            })
            .collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "halton_1024");
    }

    #[test]
    fn no_sample_counts() {
        let config = Config {
            sample_counts: Vec::new(),
            ..seeded_config()
        };
        let mut sink = RecordingSink::default();
        run_sketch(&config, &mut sink).unwrap();
        assert_eq!(sink.layouts.len(), 1);
        assert!(sink.point_sets.is_empty());
    }
}
