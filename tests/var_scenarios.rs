use fundrisk::prelude::*;
use rand::prelude::*;
use rand_distr::StandardNormal;

fn level(c: f64) -> ConfidenceLevel {
    ConfidenceLevel::new(c).unwrap()
}

fn normal_returns(n: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            mean + std * z
        })
        .collect()
}

#[test]
fn test_ten_point_fixture() {
    let returns = vec![0.01, -0.02, 0.015, -0.005, 0.02, -0.01, 0.0, 0.008, -0.015, 0.012];
    let model = HistoricalVaR::from_returns(&returns).unwrap();

    let var = model.value_at_risk(level(0.95));
    assert!((var - 0.01775).abs() < 1e-12);
    let cvar = model.expected_shortfall(level(0.95)).unwrap().unwrap();
    assert!((cvar - 0.02).abs() < 1e-12);

    // The standalone helper agrees with the model's own tail
    assert!((conditional_var(&returns, var, level(0.95)).unwrap() - cvar).abs() < 1e-15);
}

#[test]
fn test_zero_variance_series() {
    let series = ReturnSeries::new(vec![0.001; 50], 30).unwrap();
    let engine = RiskEngine::new(EngineConfig::default().with_seed(11)).unwrap();
    let report = engine.analyze_returns(&series, &[0.95, 0.99]).unwrap();

    assert!(report.stats.is_degenerate());
    assert_eq!(report.stats.std_daily, 0.0);
    assert_eq!(report.stats.sharpe_ratio, None);
    assert_eq!(report.stats.skewness, None);
    assert_eq!(report.stats.normality_p_value, None);

    // Every method collapses to the constant loss -0.001
    for e in &report.estimates {
        assert!((e.var + 0.001).abs() < 1e-12, "{:?} var {}", e.method, e.var);
        assert!((e.cvar.unwrap() + 0.001).abs() < 1e-12);
    }
}

#[test]
fn test_constant_series_sweep_keeps_tails() {
    let config = EngineConfig::default().with_seed(3).with_num_simulations(1_000);
    let engine = RiskEngine::new(config).unwrap();

    for k in 0..60 {
        let v = 0.07 - 0.0001 * k as f64;
        for n in [30usize, 31, 47, 50, 73, 99] {
            let series = ReturnSeries::new(vec![v; n], 30).unwrap();
            let report = engine
                .analyze_returns(&series, &[0.95, 0.99, 0.975])
                .unwrap_or_else(|e| panic!("v={v} n={n}: {e}"));
            for e in &report.estimates {
                let cvar = e.cvar.unwrap();
                assert!(cvar >= e.var, "v={v} n={n} {:?}", e.method);
                assert!((e.var + v).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_tied_minimum_returns() {
    let engine = RiskEngine::new(EngineConfig::default().with_seed(4)).unwrap();

    for i in 0..50 {
        let x = -0.0301 - 0.00037 * i as f64;
        let mut returns = vec![x, x];
        returns.extend((0..40).map(|j| 0.01 + 0.0005 * j as f64));
        let series = ReturnSeries::new(returns, 30).unwrap();

        let historical = HistoricalVaR::new(&series).unwrap();
        for c in [0.99, 0.985, 0.995] {
            let var = historical.value_at_risk(level(c));
            assert_eq!(var, -x, "x={x} c={c}");
            let cvar = historical.expected_shortfall(level(c)).unwrap().unwrap();
            assert!(cvar >= var);
        }

        let report = engine
            .analyze_returns(&series, &[0.99, 0.985, 0.995])
            .unwrap_or_else(|e| panic!("x={x}: {e}"));
        assert!(report.estimates.iter().all(|e| e.cvar.is_some()));
    }
}

#[test]
fn test_insufficient_prices() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let prices: Vec<PricePoint> = (0..30)
        .map(|i| PricePoint::new(start + chrono::Duration::days(i), 10.0 + i as f64 * 0.1))
        .collect();

    let engine = RiskEngine::new(EngineConfig::default()).unwrap();
    assert_eq!(
        engine.analyze_prices(&prices, &[0.95]).unwrap_err(),
        RiskError::InsufficientData {
            required: 31,
            actual: 30
        }
    );
}

#[test]
fn test_bad_price_is_reported_with_index() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut prices: Vec<PricePoint> = (0..40)
        .map(|i| PricePoint::new(start + chrono::Duration::days(i), 10.0))
        .collect();
    prices[17].close = 0.0;

    let engine = RiskEngine::new(EngineConfig::default()).unwrap();
    assert!(matches!(
        engine.analyze_prices(&prices, &[0.95]),
        Err(RiskError::InvalidPrice { index: 17, .. })
    ));
}

#[test]
fn test_historical_converges_to_parametric() {
    let returns = normal_returns(50_000, 0.0005, 0.01, 31);
    let series = ReturnSeries::new(returns, 30).unwrap();
    let stats = compute_stats(&series, &EngineConfig::default()).unwrap();

    let parametric = ParametricVaR::from_stats(&stats);
    let historical = HistoricalVaR::new(&series).unwrap();
    for c in [0.95, 0.99] {
        let p = parametric.value_at_risk(level(c));
        let h = historical.value_at_risk(level(c));
        assert!((h - p).abs() / p < 0.05, "c={c}: historical {h} vs parametric {p}");
    }

    let test = normality_test(series.values()).unwrap();
    assert!(test.p_value > 1e-4, "normal draws rejected: {test:?}");
}

#[test]
fn test_unseeded_monte_carlo_tracks_parametric() {
    let returns = normal_returns(500, 0.0003, 0.012, 5);
    let series = ReturnSeries::new(returns, 30).unwrap();
    let config = EngineConfig::default().with_num_simulations(200_000);
    assert_eq!(config.seed, None);

    let report = RiskEngine::new(config)
        .unwrap()
        .analyze_returns(&series, &[0.95, 0.99])
        .unwrap();
    assert_eq!(report.seed, None);

    for c in [0.95, 0.99] {
        let p = report.estimate(VarMethod::Parametric, c).unwrap();
        let m = report.estimate(VarMethod::MonteCarlo, c).unwrap();
        assert!((m.var - p.var).abs() / p.var < 0.05);
        assert!((m.cvar.unwrap() - p.cvar.unwrap()).abs() / p.cvar.unwrap() < 0.05);
    }
}

#[test]
fn test_fat_tails_show_up_in_historical() {
    // Mostly calm days with a few crashes: the empirical tail is heavier
    let mut returns = normal_returns(980, 0.0005, 0.008, 8);
    returns.extend(std::iter::repeat(-0.06).take(20));
    let series = ReturnSeries::new(returns, 30).unwrap();
    let stats = compute_stats(&series, &EngineConfig::default()).unwrap();

    let parametric = ParametricVaR::from_stats(&stats).value_at_risk(level(0.99));
    let historical = HistoricalVaR::new(&series).unwrap().value_at_risk(level(0.99));
    assert!(historical > parametric);
    assert!(stats.excess_kurtosis.unwrap() > 1.0);
    assert!(stats.normality_p_value.unwrap() < 0.01);
}

#[test]
fn test_portfolio_of_identical_assets_matches_single() {
    let a = normal_returns(300, 0.0, 0.01, 21);
    let rows: Vec<Vec<f64>> = a.iter().map(|&r| vec![r, r]).collect();

    let single = HistoricalVaR::from_returns(&a).unwrap().value_at_risk(level(0.95));
    let combined = portfolio_var(&[0.5, 0.5], &rows, level(0.95)).unwrap();
    assert!((combined - single).abs() < 1e-12);
}
