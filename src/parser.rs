use crate::{Error, Result, Road, RoadType};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

/// Parses a single line of the form `<roadType> <srcX> <srcY> <dstX> <dstY>`.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{Road, RoadType};
/// let road: Road = "1 0 0 10 -5".parse().unwrap();
/// assert_eq!(road, Road::new(RoadType::OneWay, (0, 0), (10, -5)));
///
/// assert!("3 0 0 10 -5".parse::<Road>().is_err());
/// ```
impl FromStr for Road {
    type Err = Error;
    fn from_str(line: &str) -> Result<Road> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [road_type, src_x, src_y, dst_x, dst_y] = tokens[..] else {
            return Err(Error::MalformedLine {
                found: tokens.len(),
            });
        };

        let road_type = RoadType::try_from(parse_int::<i64>(road_type)?)?;
        let start = (parse_int(src_x)?, parse_int(src_y)?);
        let end = (parse_int(dst_x)?, parse_int(dst_y)?);

        Ok(Road::new(road_type, start, end))
    }
}

fn parse_int<T: FromStr<Err = ParseIntError>>(token: &str) -> Result<T> {
    token.parse().map_err(|source| Error::InvalidInteger {
        token: token.to_owned(),
        source,
    })
}

/// Reads a list of Roads, one per non-empty line.
///
/// Each line must be of the form
/// ```text
/// <roadType> <srcX> <srcY> <dstX> <dstY>
/// ```
/// where `roadType` is `1` (one-way) or `2` (two-way) and the others are integers, separated
/// by whitespace. Errors are wrapped in [`Error::AtLine`] with the number of the offending line.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{parse_roads, Road, RoadType};
/// let text = "2 0 0 10 0\n\n1 10 0 10 10\n";
/// let roads = parse_roads(text.as_bytes()).unwrap();
///
/// assert_eq!(
///     roads,
///     vec![
///         Road::new(RoadType::TwoWay, (0, 0), (10, 0)),
///         Road::new(RoadType::OneWay, (10, 0), (10, 10)),
///     ]
/// );
/// ```
pub fn parse_roads(reader: impl BufRead) -> Result<Vec<Road>> {
    let mut roads = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let road = line.parse().map_err(|source| Error::AtLine {
            line: index + 1,
            source: Box::new(source),
        })?;
        roads.push(road);
    }
    debug!("parsed {} roads", roads.len());
    Ok(roads)
}

/// Reads a list of Roads from the file at `path`. See [`parse_roads`] for the format.
pub fn read_roads(path: impl AsRef<Path>) -> Result<Vec<Road>> {
    let file = File::open(path)?;
    parse_roads(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines() {
        let text = "\n2 1 2 3 4\n   \n\t1  -5 6\t7 8  \n";
        let roads = parse_roads(text.as_bytes()).unwrap();
        assert_eq!(
            roads,
            vec![
                Road::new(RoadType::TwoWay, (1, 2), (3, 4)),
                Road::new(RoadType::OneWay, (-5, 6), (7, 8)),
            ]
        );
    }

    #[test]
    fn unknown_road_type() {
        let text = "2 0 0 1 1\n7 0 0 1 1\n";
        let err = parse_roads(text.as_bytes()).unwrap_err();
        match err {
            Error::AtLine { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, Error::UnknownRoadType(7)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_value_count() {
        let err = "2 0 0 1".parse::<Road>().unwrap_err();
        assert!(matches!(err, Error::MalformedLine { found: 4 }));

        let err = "2 0 0 1 1 1".parse::<Road>().unwrap_err();
        assert!(matches!(err, Error::MalformedLine { found: 6 }));
    }

    #[test]
    fn invalid_integer() {
        let err = parse_roads("1 0 0 x 1".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid integer \"x\"");
    }

    #[test]
    fn missing_file() {
        let err = read_roads("this/file/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
