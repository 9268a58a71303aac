#[cfg(test)]
mod test_sampling {
    use bayessim::bnet::common::interface::ScenarioMaker;
    use bayessim::bnet::inference::{estimate_prior, sample_joint};
    use bayessim::bnet::model::{CptIndexing, Network, NetworkBuilder};
    use bayessim::bnet::scenarios::hare_race::HareRace;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn constant_network(p: f64) -> Network {
        let mut builder = NetworkBuilder::new();
        builder.add_node("A", &[], vec![p]).unwrap();
        builder.add_node("B", &["A"], vec![p, p]).unwrap();
        builder.add_node("C", &["A", "B"], vec![p, p, p, p]).unwrap();
        builder.build()
    }

    fn all_values(network: &Network) -> Vec<Option<bool>> {
        network.nodes().iter().map(|node| node.value()).collect()
    }

    #[test]
    fn test_probability_one_is_always_true() {
        let mut network = constant_network(1.0);
        // largest possible draw, just below 1.0
        let mut high = StepRng::new(u64::MAX, 0);
        sample_joint(&mut network, &mut high).unwrap();
        assert_eq!(all_values(&network), vec![Some(true); 3]);

        let mut low = StepRng::new(0, 0);
        sample_joint(&mut network, &mut low).unwrap();
        assert_eq!(all_values(&network), vec![Some(true); 3]);
    }

    #[test]
    fn test_probability_zero_is_always_false() {
        let mut network = constant_network(0.0);
        // a draw of exactly 0.0 must not turn a zero-probability node on
        let mut low = StepRng::new(0, 0);
        sample_joint(&mut network, &mut low).unwrap();
        assert_eq!(all_values(&network), vec![Some(false); 3]);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            sample_joint(&mut network, &mut rng).unwrap();
            assert_eq!(all_values(&network), vec![Some(false); 3]);
        }
    }

    #[test]
    fn test_children_see_current_pass() {
        // B copies A and C copies B
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", &[], vec![0.5]).unwrap();
        let b = builder.add_node("B", &["A"], vec![1.0, 0.0]).unwrap();
        let c = builder.add_node("C", &["B"], vec![1.0, 0.0]).unwrap();
        let mut network = builder.build();

        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 2];
        for _ in 0..200 {
            sample_joint(&mut network, &mut rng).unwrap();
            let value = network.value(a).unwrap().unwrap();
            assert_eq!(network.value(b).unwrap(), Some(value));
            assert_eq!(network.value(c).unwrap(), Some(value));
            seen[usize::from(value)] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let scenario = HareRace {};
        let mut first = scenario.build_network(CptIndexing::Legacy).unwrap();
        let mut second = scenario.build_network(CptIndexing::Legacy).unwrap();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            sample_joint(&mut first, &mut rng_a).unwrap();
            sample_joint(&mut second, &mut rng_b).unwrap();
            assert_eq!(first.render_state(), second.render_state());
        }
    }

    #[test]
    fn test_sample_overwrites_every_node() {
        let mut network = HareRace {}.build_network(CptIndexing::Legacy).unwrap();
        assert!(all_values(&network).iter().all(Option::is_none));
        let mut rng = StdRng::seed_from_u64(5);
        sample_joint(&mut network, &mut rng).unwrap();
        assert!(all_values(&network).iter().all(Option::is_some));
        assert!(!network.render_state().contains("unset"));
    }

    #[test]
    fn test_prior_estimate_converges() {
        let mut network = HareRace {}.build_network(CptIndexing::Legacy).unwrap();
        let tortoise = network.id_of("TortoisePerf").unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        // 0.4 * 0.8 + 0.6 * 0.1
        let p = estimate_prior(&mut network, tortoise, 20_000, &mut rng).unwrap();
        assert!((p - 0.38).abs() < 0.02, "got {}", p);
    }
}
