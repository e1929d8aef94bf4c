//! Machine-readable exports.

use ls_analysis::DerivedParameters;
use ls_response::ResponsePoint;

/// Build a CSV document from a time series.
///
/// One `time_s,value` header, one row per sample. Byte-deterministic for a
/// given series.
pub fn series_to_csv(series: &[ResponsePoint]) -> String {
    let mut csv = String::from("time_s,value\n");
    for point in series {
        csv.push_str(&format!("{},{}\n", point.time, point.value));
    }
    csv
}

/// Serialize derived parameters as pretty-printed JSON.
pub fn parameters_to_json(params: &DerivedParameters) -> serde_json::Result<String> {
    serde_json::to_string_pretty(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls_analysis::{StepInput, TransferFunction, derive_parameters};

    #[test]
    fn csv_shape() {
        let series = vec![
            ResponsePoint { time: 0.0, value: 0.0 },
            ResponsePoint { time: 0.5, value: 1.25 },
        ];
        assert_eq!(series_to_csv(&series), "time_s,value\n0,0\n0.5,1.25\n");
    }

    #[test]
    fn csv_is_deterministic() {
        let series = vec![ResponsePoint { time: 0.1, value: 2.0 }];
        assert_eq!(series_to_csv(&series), series_to_csv(&series));
    }

    #[test]
    fn json_round_trips() {
        let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, 2.0]).unwrap();
        let input = StepInput::new(4.0).unwrap();
        let params = derive_parameters(&tf, &input).unwrap();
        let json = parameters_to_json(&params).unwrap();
        assert!(json.contains("\"order\": \"First\""));
        let back: DerivedParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
