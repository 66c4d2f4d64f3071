use chrono::{Duration, NaiveDate};
use fundrisk::prelude::*;
use rand::prelude::*;
use rand_distr::StandardNormal;

/// Two years of business-day-ish closes from a seeded random walk
fn fund_prices(n: usize, seed: u64) -> Vec<PricePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
    let mut close = 25.0;
    (0..n)
        .map(|i| {
            if i > 0 {
                let z: f64 = rng.sample(StandardNormal);
                close *= 1.0 + 0.0004 + 0.011 * z;
            }
            PricePoint::new(start + Duration::days(i as i64), close)
        })
        .collect()
}

#[test]
fn test_realistic_example() {
    fundrisk::logging::init_logging("fundrisk=debug").unwrap();

    let prices = fund_prices(505, 2024);
    let engine = RiskEngine::new(EngineConfig::default().with_seed(42)).unwrap();
    let report = engine.analyze_prices(&prices, &[0.95, 0.99]).unwrap();

    println!("Fund statistics over {} returns:", report.stats.sample_size);
    println!(
        "  daily mean={:+.5} std={:.5}  annual mean={:+.4} std={:.4}",
        report.stats.mean_daily,
        report.stats.std_daily,
        report.stats.mean_annualized,
        report.stats.std_annualized
    );
    for e in &report.estimates {
        println!(
            "  {:<12} {:>6}  VaR={:.5}  CVaR={:.5}",
            e.method.as_str(),
            e.confidence.to_string(),
            e.var,
            e.cvar.unwrap()
        );
    }

    // === Sanity checks ===
    assert_eq!(report.stats.sample_size, 504);
    assert_eq!(report.estimates.len(), 6);
    assert!(report.stats.normality_p_value.is_some());
    assert!(report.stats.sharpe_ratio.is_some());

    for method in VarMethod::ALL {
        let v95 = report.estimate(method, 0.95).unwrap();
        let v99 = report.estimate(method, 0.99).unwrap();
        assert!(v99.var > v95.var, "{method:?} not monotone");
        assert!(v95.cvar.unwrap() >= v95.var);
        assert!(v99.cvar.unwrap() >= v99.var);
    }

    // The three methods describe the same fund, they should broadly agree
    let p = report.estimate(VarMethod::Parametric, 0.95).unwrap().var;
    let h = report.estimate(VarMethod::Historical, 0.95).unwrap().var;
    let m = report.estimate(VarMethod::MonteCarlo, 0.95).unwrap().var;
    assert!((h - p).abs() / p < 0.25, "historical {h} vs parametric {p}");
    assert!((m - p).abs() / p < 0.05, "monte carlo {m} vs parametric {p}");
}

#[test]
fn test_seeded_analysis_is_reproducible() {
    let prices = fund_prices(200, 9);
    let engine = RiskEngine::new(EngineConfig::default().with_seed(123)).unwrap();
    let a = engine.analyze_prices(&prices, &[0.95, 0.99]).unwrap();
    let b = engine.analyze_prices(&prices, &[0.95, 0.99]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_log_returns_flow_through() {
    let prices = fund_prices(120, 5);
    let config = EngineConfig::default()
        .with_seed(3)
        .with_return_kind(ReturnKind::Log);
    let report = RiskEngine::new(config)
        .unwrap()
        .analyze_prices(&prices, &[0.99])
        .unwrap();

    assert_eq!(report.return_kind, ReturnKind::Log);
    let expected = (prices[1].close / prices[0].close).ln();
    let series = prepare(&prices, ReturnKind::Log, 30).unwrap();
    assert!((series.values()[0] - expected).abs() < 1e-15);
}

#[test]
fn test_backtest_parametric_forecast() {
    let prices = fund_prices(505, 77);
    let series = prepare(&prices, ReturnKind::Simple, 30).unwrap();
    let stats = compute_stats(&series, &EngineConfig::default()).unwrap();

    let level = ConfidenceLevel::new(0.95).unwrap();
    let var = ParametricVaR::from_stats(&stats).value_at_risk(level);
    let forecasts = vec![var; series.len()];

    let report = backtest_var(series.values(), &forecasts, level, 0.01).unwrap();
    assert_eq!(report.observations, 504);
    // In-sample normal VaR on normal returns: violation rate close to 5%
    assert!(report.violation_rate > 0.02 && report.violation_rate < 0.08);
    assert!(report.model_adequate);
}

#[test]
fn test_report_rows_cover_every_estimate() {
    let prices = fund_prices(100, 1);
    let engine = RiskEngine::new(EngineConfig::default().with_seed(0)).unwrap();
    let report = engine.analyze_prices(&prices, &[0.9, 0.975]).unwrap();
    let rows = report.metric_rows();

    for name in [
        "parametric_var_90",
        "parametric_cvar_97_5",
        "historical_var_97_5",
        "monte_carlo_cvar_90",
        "annual_std",
    ] {
        assert!(rows.iter().any(|(k, _)| k == name), "missing {name}");
    }
}
