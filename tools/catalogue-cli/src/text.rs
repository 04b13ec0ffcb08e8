//! Line-oriented text mode.
//!
//! Input is two blocks, each a count followed by that many lines:
//!
//! ```text
//! 3
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 750: Tolstopaltsevo - Marushkino
//! 2
//! Bus 750
//! Stop Marushkino
//! ```
//!
//! `A > B > A` describes a circular route, `A - B` a linear one.

use anyhow::{bail, Context, Result};
use std::str::Lines;
use transit_catalogue::prelude::*;

const SIGNIFICANT_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Bus(String),
    Stop(String),
}

/// Parse the whole text input into a batch and the queries to answer
pub fn parse(input: &str) -> Result<(IngestBatch, Vec<Query>)> {
    let mut lines = input.lines();

    let mut batch = IngestBatch::default();
    for line in counted_block(&mut lines).context("Failed to read base requests")? {
        parse_base_line(line, &mut batch).with_context(|| format!("Invalid base request: {line}"))?;
    }

    let queries = counted_block(&mut lines)
        .context("Failed to read stat requests")?
        .into_iter()
        .map(|line| parse_query(line).with_context(|| format!("Invalid stat request: {line}")))
        .collect::<Result<Vec<_>>>()?;

    Ok((batch, queries))
}

/// Ingest the input and answer every query, one line per answer
pub fn run(input: &str) -> Result<String> {
    let (batch, queries) = parse(input)?;
    let catalogue = TransportCatalogue::from_batch(batch);

    let mut out = String::new();
    for query in &queries {
        out.push_str(&answer(&catalogue, query)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn answer<C: CatalogueReader + ?Sized>(catalogue: &C, query: &Query) -> Result<String> {
    let line = match query {
        Query::Bus(name) => match route_statistics(catalogue, name) {
            Ok(stats) => {
                let curvature = match stats.curvature() {
                    Ok(curvature) => format_significant(curvature, SIGNIFICANT_DIGITS),
                    Err(_) => "indeterminate".to_string(),
                };
                format!(
                    "Bus {name}: {} stops on route, {} unique stops, {} route length, {curvature} curvature",
                    stats.stop_count, stats.unique_stop_count, stats.route_length
                )
            }
            Err(err) if err.is_not_found() => format!("Bus {name}: not found"),
            Err(err) => return Err(err.into()),
        },
        Query::Stop(name) => match stop_statistics(catalogue, name) {
            Ok(stats) if stats.routes.is_empty() => format!("Stop {name}: no buses"),
            Ok(stats) => format!("Stop {name}: buses {}", stats.routes.join(" ")),
            Err(err) if err.is_not_found() => format!("Stop {name}: not found"),
            Err(err) => return Err(err.into()),
        },
    };
    Ok(line)
}

fn counted_block<'a>(lines: &mut Lines<'a>) -> Result<Vec<&'a str>> {
    let count: usize = lines
        .next()
        .context("Missing request count")?
        .trim()
        .parse()
        .context("Request count is not a number")?;

    let block: Vec<&str> = lines.by_ref().take(count).collect();
    if block.len() < count {
        bail!("Expected {count} requests, found {}", block.len());
    }
    Ok(block)
}

fn parse_base_line(line: &str, batch: &mut IngestBatch) -> Result<()> {
    let (keyword, rest) = line.trim().split_once(' ').context("Missing request keyword")?;
    let (name, body) = rest.split_once(':').context("Missing ':' after the name")?;
    let name = name.trim().to_string();

    match keyword.to_lowercase().as_str() {
        "stop" => {
            let mut fields = body.split(',').map(str::trim);
            let lat = parse_coordinate(fields.next())?;
            let lng = parse_coordinate(fields.next())?;

            for field in fields {
                let (meters, to) = field
                    .split_once("m to ")
                    .with_context(|| format!("Malformed distance: {field}"))?;
                batch.distances.push(DistanceRecord {
                    from: name.clone(),
                    to: to.trim().to_string(),
                    meters: meters.trim().parse().with_context(|| format!("Malformed distance: {field}"))?,
                });
            }

            batch.stops.push(StopRecord {
                name,
                coordinates: Coordinates::new(lat, lng),
            });
        }
        "bus" => {
            let circular = body.contains('>');
            let delimiter = if circular { '>' } else { '-' };
            batch.routes.push(RouteRecord {
                name,
                stops: body.split(delimiter).map(|stop| stop.trim().to_string()).collect(),
                circular,
            });
        }
        other => bail!("Unknown request type: {other}"),
    }

    Ok(())
}

fn parse_coordinate(field: Option<&str>) -> Result<f64> {
    field
        .context("Missing coordinate")?
        .parse()
        .context("Coordinate is not a number")
}

fn parse_query(line: &str) -> Result<Query> {
    let (keyword, name) = line.trim().split_once(' ').context("Missing query keyword")?;
    let name = name.trim().to_string();

    match keyword.to_lowercase().as_str() {
        "bus" => Ok(Query::Bus(name)),
        "stop" => Ok(Query::Stop(name)),
        other => bail!("Unknown query type: {other}"),
    }
}

/// Format with at most `digits` significant digits, dropping trailing zeros
///
/// Switches to exponent form (`1.23457e+06`) when the decimal exponent is
/// below -4 or at least `digits`, like C's `%g`.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let precision = digits.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
10
Stop Tolstopaltsevo: 55.611087, 37.208290, 3900m to Marushkino
Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka, 100m to Marushkino
Bus 256: Biryulyovo Zapadnoye > Biryusinka > Universam > Biryulyovo Tovarnaya > Biryulyovo Passazhirskaya > Biryulyovo Zapadnoye
Bus 750: Tolstopaltsevo - Marushkino - Marushkino - Rasskazovka
Stop Rasskazovka: 55.632761, 37.333324, 9500m to Marushkino
Stop Biryulyovo Zapadnoye: 55.574371, 37.6517, 7500m to Rossoshanskaya ulitsa, 1800m to Biryusinka, 2400m to Universam
Stop Biryusinka: 55.581065, 37.64839, 750m to Universam
Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya
Stop Biryulyovo Tovarnaya: 55.592028, 37.653656, 1300m to Biryulyovo Passazhirskaya
Stop Biryulyovo Passazhirskaya: 55.580999, 37.659164, 1200m to Biryulyovo Zapadnoye
6
Bus 256
Bus 750
Bus 751
Stop Samara
Stop Prazhskaya
Stop Biryulyovo Zapadnoye
";

    #[test]
    fn test_parse_blocks() {
        let (batch, queries) = parse(INPUT).unwrap();

        assert_eq!(batch.stops.len(), 8);
        assert_eq!(batch.routes.len(), 2);
        assert_eq!(queries.len(), 6);
        assert_eq!(queries[0], Query::Bus("256".into()));
        assert_eq!(queries[5], Query::Stop("Biryulyovo Zapadnoye".into()));
    }

    #[test]
    fn test_parse_routes() {
        let (batch, _) = parse(INPUT).unwrap();

        assert!(batch.routes[0].circular);
        assert_eq!(batch.routes[0].stops.len(), 6);
        assert!(!batch.routes[1].circular);
        assert_eq!(
            batch.routes[1].stops,
            vec!["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"]
        );
    }

    #[test]
    fn test_parse_distances() {
        let (batch, _) = parse(INPUT).unwrap();

        assert!(batch.distances.contains(&DistanceRecord {
            from: "Marushkino".into(),
            to: "Marushkino".into(),
            meters: 100,
        }));
        assert_eq!(batch.distances.len(), 12);
    }

    #[test]
    fn test_answers() {
        let output = run(INPUT).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        let curvature: f64 = lines[0]
            .strip_prefix("Bus 256: 6 stops on route, 5 unique stops, 5950 route length, ")
            .and_then(|rest| rest.strip_suffix(" curvature"))
            .unwrap()
            .parse()
            .unwrap();
        assert!((curvature - 1.36124).abs() < 1e-4);
        assert!(lines[1].starts_with("Bus 750: 7 stops on route, 3 unique stops, 27400 route length, "));
        assert_eq!(lines[2], "Bus 751: not found");
        assert_eq!(lines[3], "Stop Samara: not found");
        assert_eq!(lines[4], "Stop Prazhskaya: not found");
        assert_eq!(lines[5], "Stop Biryulyovo Zapadnoye: buses 256");
    }

    #[test]
    fn test_stop_without_buses() {
        let input = "1\nStop Lonely: 1.0, 2.0\n1\nStop Lonely\n";
        assert_eq!(run(input).unwrap(), "Stop Lonely: no buses\n");
    }

    #[test]
    fn test_short_block_is_an_error() {
        assert!(parse("3\nStop A: 1, 2\n").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_unknown_keyword_is_an_error() {
        assert!(parse("1\nTram 1: A - B\n0\n").is_err());
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(1.361239, 6), "1.36124");
        assert_eq!(format_significant(1.5, 6), "1.5");
        assert_eq!(format_significant(1234.5678, 6), "1234.57");
        assert_eq!(format_significant(2.0, 6), "2");
        assert_eq!(format_significant(0.0, 6), "0");
    }

    #[test]
    fn test_format_significant_exponent_form() {
        assert_eq!(format_significant(1_234_567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(999_999.0, 6), "999999");
        assert_eq!(format_significant(999_999.7, 6), "1e+06");
        assert_eq!(format_significant(0.000012345, 6), "1.2345e-05");
        assert_eq!(format_significant(0.0001, 6), "0.0001");
    }
}
