// demos/plot_sensitivity.rs
// Generates the price-vs-spot sensitivity curve for a scenario and renders
// it as an SVG line chart, plus a CSV export of the raw points.
//
// Usage:
//     cargo run --example plot_sensitivity [scenario.toml]
//
// Without an argument the canonical ATM scenario (1800/1800, 1% rate,
// 30 days, 20% vol) is used. Output files are written to the working
// directory: sensitivity_curve.svg and sensitivity_curve.csv.

use std::env;

use anyhow::{Context, Result};
use plotters::prelude::*;

use greeks_lib::{generate_curve, MarketParameters, Scenario};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let scenario = match args.get(1) {
        Some(path) => Scenario::from_path(path)?,
        None => {
            println!("No scenario file given, using defaults");
            Scenario::default()
        }
    };

    println!(
        "Scenario: spot={} strike={} rate={}% days={} vol={}%",
        scenario.spot_price,
        scenario.strike_price,
        scenario.risk_free_rate_percent,
        scenario.days_to_expiry,
        scenario.volatility_percent
    );

    let params: MarketParameters = scenario.clone().into();
    let curve = generate_curve(&params).context("curve generation failed")?;
    println!("Generated {} curve points", curve.len());

    // CSV export for downstream tooling
    let mut writer = csv::Writer::from_path("sensitivity_curve.csv")
        .context("failed to create sensitivity_curve.csv")?;
    for point in &curve {
        writer.serialize(point)?;
    }
    writer.flush()?;
    println!("Curve saved to sensitivity_curve.csv");

    // Axis ranges from the data, with a little padding on the y axis
    let min_spot = curve.first().unwrap().spot_price;
    let max_spot = curve.last().unwrap().spot_price;

    let min_price = curve
        .iter()
        .flat_map(|p| [p.call_price, p.put_price])
        .fold(f64::INFINITY, f64::min);
    let max_price = curve
        .iter()
        .flat_map(|p| [p.call_price, p.put_price])
        .fold(f64::NEG_INFINITY, f64::max);

    let padding = (max_price - min_price) * 0.05;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    let root = SVGBackend::new("sensitivity_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Option Price vs Spot | K={:.0} r={:.2}% t={:.0}d vol={:.0}%",
                scenario.strike_price,
                scenario.risk_free_rate_percent,
                scenario.days_to_expiry,
                scenario.volatility_percent
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_spot..max_spot, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    let call_line: Vec<(f64, f64)> = curve.iter().map(|p| (p.spot_price, p.call_price)).collect();
    let put_line: Vec<(f64, f64)> = curve.iter().map(|p| (p.spot_price, p.put_price)).collect();

    chart
        .draw_series(std::iter::once(PathElement::new(
            call_line,
            RED.stroke_width(2),
        )))?
        .label("Call Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(std::iter::once(PathElement::new(
            put_line,
            BLUE.stroke_width(2),
        )))?
        .label("Put Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    // Per-point markers on top of the lines
    chart.draw_series(
        curve
            .iter()
            .map(|p| Circle::new((p.spot_price, p.call_price), 3, RED.filled())),
    )?;
    chart.draw_series(
        curve
            .iter()
            .map(|p| Circle::new((p.spot_price, p.put_price), 3, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    println!("Chart saved to sensitivity_curve.svg");
    Ok(())
}
