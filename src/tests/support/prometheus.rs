/// Reads one sample out of a Prometheus text exposition.
///
/// Matches the first non-comment line for `name` whose label set contains
/// every entry of `labels` (each written as `key="value"`).
pub fn sample(rendered: &str, name: &str, labels: &[&str]) -> Option<f64> {
    rendered
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            line.starts_with(&format!("{name}{{")) || line.starts_with(&format!("{name} "))
        })
        .find(|line| labels.iter().all(|label| line.contains(label)))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "\
# TYPE requests_total counter
requests_total{method=\"Get\",code=\"OK\"} 3
requests_total{method=\"Get\",code=\"NOT_FOUND\"} 1
requests_total_other 9
in_flight 2
";

    #[test]
    fn test_sample_matches_name_and_labels() {
        assert_eq!(sample(RENDERED, "requests_total", &[r#"code="NOT_FOUND""#]), Some(1.0));
        assert_eq!(sample(RENDERED, "in_flight", &[]), Some(2.0));
        assert_eq!(sample(RENDERED, "requests_total", &[r#"code="INTERNAL""#]), None);
        assert_eq!(sample(RENDERED, "missing", &[]), None);
    }
}
