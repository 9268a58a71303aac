#[cfg(test)]
mod test_gibbs {
    use bayessim::bnet::common::interface::{ConditionalEstimator, ScenarioMaker};
    use bayessim::bnet::inference::gibbs::blanket_probability_of_true;
    use bayessim::bnet::inference::{
        estimate_conditional, estimate_conditional_mcmc, gibbs_sample, sample_joint, Algorithm,
        GibbsConfig, GibbsSampler,
    };
    use bayessim::bnet::model::{CptIndexing, Evidence, NetworkBuilder};
    use bayessim::bnet::scenarios::hare_race::HareRace;
    use bayessim::NetworkError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blanket_probability_single_parent() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", &[], vec![0.3]).unwrap();
        let b = builder.add_node("B", &["A"], vec![0.9, 0.2]).unwrap();
        let mut network = builder.build();
        network.assign(b, true).unwrap();

        let p = blanket_probability_of_true(&mut network, a).unwrap();
        let exact = 0.3 * 0.9 / (0.3 * 0.9 + 0.7 * 0.2);
        assert!((p - exact).abs() < 1e-12);
    }

    #[test]
    fn test_gibbs_matches_bayes_rule() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", &[], vec![0.3]).unwrap();
        let b = builder.add_node("B", &["A"], vec![0.9, 0.2]).unwrap();
        let mut network = builder.build();
        let evidence = Evidence::new().with(b, true);
        let mut rng = StdRng::seed_from_u64(21);

        let config = GibbsConfig {
            burn_in: 50,
            ..GibbsConfig::default()
        };
        let estimate = gibbs_sample(&mut network, a, &evidence, 20_000, &config, &mut rng).unwrap();
        let exact = 0.27 / 0.41;
        assert_eq!(estimate.algorithm, Algorithm::Gibbs);
        assert_eq!(estimate.samples_drawn, 20_050);
        assert_eq!(estimate.samples_accepted, 20_000);
        assert!((estimate.probability - exact).abs() < 0.03, "got {}", estimate.probability);
        // evidence stays clamped for the whole chain
        assert_eq!(network.value(b).unwrap(), Some(true));
    }

    #[test]
    fn test_mcmc_on_reference_network() {
        let mut network = HareRace {}.build_network(CptIndexing::Legacy).unwrap();
        let course = network.id_of("Course").unwrap();
        let evidence =
            Evidence::from_names(&network, &[("TortoisePerf", true), ("HareWins", false)]).unwrap();
        let mut rng = StdRng::seed_from_u64(22);

        let p = estimate_conditional_mcmc(&mut network, course, &evidence, 20_000, &mut rng).unwrap();
        let exact = 0.32 / 0.38;
        assert!((p - exact).abs() < 0.03, "got {}", p);
    }

    #[test]
    fn test_query_on_evidence_node() {
        let mut network = HareRace {}.build_network(CptIndexing::Legacy).unwrap();
        let weather = network.id_of("Weather").unwrap();
        let evidence = Evidence::new().with(weather, true);
        let mut rng = StdRng::seed_from_u64(23);

        let p = estimate_conditional_mcmc(&mut network, weather, &evidence, 500, &mut rng).unwrap();
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_deterministic_chain_with_consistent_evidence() {
        // B copies A and C copies B, so C=true forces A=true
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", &[], vec![0.5]).unwrap();
        builder.add_node("B", &["A"], vec![1.0, 0.0]).unwrap();
        let c = builder.add_node("C", &["B"], vec![1.0, 0.0]).unwrap();
        let mut network = builder.build();
        let evidence = Evidence::new().with(c, true);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let gibbs = estimate_conditional_mcmc(&mut network, a, &evidence, 2_000, &mut rng);
            assert_eq!(gibbs, Ok(1.0), "seed {}", seed);

            let rejection = estimate_conditional(&mut network, a, &evidence, 2_000, &mut rng);
            assert_eq!(rejection, Ok(1.0), "seed {}", seed);
        }
    }

    #[test]
    fn test_contradictory_evidence_is_an_error() {
        // B copies A, C negates A, observing both true is impossible
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", &[], vec![0.5]).unwrap();
        let b = builder.add_node("B", &["A"], vec![1.0, 0.0]).unwrap();
        let c = builder.add_node("C", &["A"], vec![0.0, 1.0]).unwrap();
        let mut network = builder.build();
        let evidence = Evidence::new().with(b, true).with(c, true);
        let mut rng = StdRng::seed_from_u64(24);

        // no forward sample ever agrees with the evidence
        let config = GibbsConfig { burn_in: 10, max_start_attempts: 500 };
        let result = gibbs_sample(&mut network, a, &evidence, 100, &config, &mut rng);
        assert_eq!(result, Err(NetworkError::InsufficientSamples { drawn: 500 }));

        // forcing the contradiction onto the network leaves A with no weight
        network.assign(b, true).unwrap();
        network.assign(c, true).unwrap();
        assert_eq!(
            blanket_probability_of_true(&mut network, a),
            Err(NetworkError::ImpossibleState { node: "A".to_string() })
        );
    }

    #[test]
    fn test_zero_sweeps_is_an_error() {
        let mut network = HareRace {}.build_network(CptIndexing::Legacy).unwrap();
        let course = network.id_of("Course").unwrap();
        let mut rng = StdRng::seed_from_u64(25);
        sample_joint(&mut network, &mut rng).unwrap();

        let sampler = GibbsSampler::new(GibbsConfig::default());
        let result = sampler.estimate(&mut network, course, &Evidence::new(), 0, &mut rng);
        assert_eq!(result, Err(NetworkError::InsufficientSamples { drawn: 0 }));
    }
}
