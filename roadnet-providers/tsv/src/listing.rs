//! Parsing of road listings into core values.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use roadnet_core::{Road, RouteQuery};
use tracing::{debug, instrument};

use crate::errors::TsvProviderError;

const ROAD_FIELDS: usize = 4;

/// A parsed road listing: the route query and the roads it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadListing {
    query: RouteQuery,
    roads: Vec<Road>,
}

impl RoadListing {
    /// Parses a listing from `reader`.
    ///
    /// Blank lines are skipped and a trailing `\r` is dropped from every
    /// line. Self-loops and repeated ids are left for the core to reject.
    ///
    /// # Errors
    /// Returns [`TsvProviderError`] when the listing is empty, a line has the
    /// wrong shape, a number does not parse, or reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use roadnet_providers_tsv::RoadListing;
    ///
    /// let listing = RoadListing::try_from_reader(Cursor::new("A\tB\nA\tB\t7\t1\n"))?;
    /// assert_eq!(listing.query().start(), "A");
    /// assert_eq!(listing.roads()[0].length(), 7);
    /// # Ok::<(), roadnet_providers_tsv::TsvProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, TsvProviderError> {
        let mut query = None;
        let mut roads = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let content = line.strip_suffix('\r').unwrap_or(&line);
            if content.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = content.split('\t').collect();
            match query {
                None => query = Some(parse_query(number, &fields)?),
                Some(_) => roads.push(parse_road(number, &fields)?),
            }
        }

        let query = query.ok_or(TsvProviderError::EmptyInput)?;
        debug!(roads = roads.len(), "road listing parsed");
        Ok(Self { query, roads })
    }

    /// Opens and parses the listing at `path`.
    ///
    /// # Errors
    /// As [`Self::try_from_reader`], plus [`TsvProviderError::Io`] when the
    /// file cannot be opened.
    #[instrument(name = "tsv.load", err, skip(path), fields(path = %path.as_ref().display()))]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, TsvProviderError> {
        let file = File::open(path.as_ref())?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Returns the route query from the first line.
    #[must_use]
    pub fn query(&self) -> &RouteQuery {
        &self.query
    }

    /// Returns the roads in listing order.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Splits the listing into its query and roads.
    #[must_use]
    pub fn into_parts(self) -> (RouteQuery, Vec<Road>) {
        (self.query, self.roads)
    }
}

fn parse_query(line: usize, fields: &[&str]) -> Result<RouteQuery, TsvProviderError> {
    let [start, end] = fields else {
        return Err(TsvProviderError::InvalidQuery {
            line,
            fields: fields.len(),
        });
    };
    require_endpoints(line, start, end)?;
    Ok(RouteQuery::new(*start, *end))
}

fn parse_road(line: usize, fields: &[&str]) -> Result<Road, TsvProviderError> {
    let [endpoint1, endpoint2, length, id] = fields else {
        return Err(TsvProviderError::WrongColumnCount {
            line,
            expected: ROAD_FIELDS,
            actual: fields.len(),
        });
    };
    require_endpoints(line, endpoint1, endpoint2)?;
    let length = length
        .parse::<u64>()
        .map_err(|source| TsvProviderError::InvalidLength {
            line,
            value: (*length).to_owned(),
            source,
        })?;
    let id = id
        .parse::<i64>()
        .map_err(|source| TsvProviderError::InvalidRoadId {
            line,
            value: (*id).to_owned(),
            source,
        })?;
    Ok(Road::new(*endpoint1, *endpoint2, length, id))
}

fn require_endpoints(line: usize, first: &str, second: &str) -> Result<(), TsvProviderError> {
    if first.is_empty() || second.is_empty() {
        return Err(TsvProviderError::EmptyEndpoint { line });
    }
    Ok(())
}
