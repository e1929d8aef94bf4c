//! Fixed-precision text reports.

use ls_analysis::{
    DerivedParameters, FirstOrderParameters, Metric, SecondOrderParameters,
};
use ls_response::PoleZeroMap;
use num_complex::Complex64;

/// Render a derived-parameter block with two-decimal formatting.
///
/// The layout is stable: the same parameters always produce the same bytes.
pub fn parameter_report(params: &DerivedParameters) -> String {
    match params {
        DerivedParameters::First(p) => first_order_report(p),
        DerivedParameters::Second(p) => second_order_report(p),
    }
}

fn first_order_report(p: &FirstOrderParameters) -> String {
    let mut out = String::from("First-order system\n");
    push_row(&mut out, "Time constant:", &format!("{:.2} s", p.time_constant));
    push_row(&mut out, "DC gain:", &format!("{:.2}", p.dc_gain));
    push_row(
        &mut out,
        "Steady-state response:",
        &format!("{:.2}", p.steady_state_response),
    );
    push_row(
        &mut out,
        "Steady-state error:",
        &format!("{:.2}", p.steady_state_error),
    );
    out
}

fn second_order_report(p: &SecondOrderParameters) -> String {
    let mut out = String::from("Second-order system\n");
    push_row(
        &mut out,
        "Natural frequency:",
        &format!("{:.2} rad/s", p.natural_frequency),
    );
    push_row(&mut out, "Damping ratio:", &format!("{:.2}", p.damping_ratio));
    push_row(&mut out, "Peak time:", &metric_cell(&p.peak_time, " s"));
    push_row(
        &mut out,
        "Percent overshoot:",
        &metric_cell(&p.percent_overshoot, " %"),
    );
    push_row(
        &mut out,
        "Settling time (1%):",
        &metric_cell(&p.settling.within_1_pct, " s"),
    );
    push_row(
        &mut out,
        "Settling time (2%):",
        &metric_cell(&p.settling.within_2_pct, " s"),
    );
    push_row(
        &mut out,
        "Settling time (5%):",
        &metric_cell(&p.settling.within_5_pct, " s"),
    );
    push_row(
        &mut out,
        "Settling time (10%):",
        &metric_cell(&p.settling.within_10_pct, " s"),
    );
    push_row(&mut out, "DC gain:", &format!("{:.2}", p.dc_gain));
    push_row(
        &mut out,
        "Steady-state response:",
        &format!("{:.2}", p.steady_state_response),
    );
    push_row(
        &mut out,
        "Steady-state error:",
        &format!("{:.2}", p.steady_state_error),
    );
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {label:<23}{value}\n"));
}

/// Numeric metrics carry their unit; regime markers stand alone.
fn metric_cell(metric: &Metric, unit: &str) -> String {
    match metric {
        Metric::Value(v) => format!("{v:.2}{unit}"),
        other => format!("{other}"),
    }
}

/// Render pole and zero locations, two decimals, `a +/- bj` style.
pub fn pole_zero_report(map: &PoleZeroMap) -> String {
    let mut out = String::from("Poles:\n");
    push_locations(&mut out, &map.poles);
    out.push_str("Zeros:\n");
    push_locations(&mut out, &map.zeros);
    out
}

fn push_locations(out: &mut String, locations: &[Complex64]) {
    if locations.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for z in locations {
        if z.im == 0.0 {
            out.push_str(&format!("  {:.2}\n", z.re));
        } else {
            let sign = if z.im < 0.0 { '-' } else { '+' };
            out.push_str(&format!("  {:.2} {} {:.2}j\n", z.re, sign, z.im.abs()));
        }
    }
}
