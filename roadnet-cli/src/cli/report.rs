//! Plain-text rendering of a [`MapAnalysis`].

use std::io::{self, Write};

use roadnet_core::{MapAnalysis, Road, Route};

/// Renders `analysis` to `writer`.
///
/// Each road is printed as `endpoint1<TAB>endpoint2<TAB>length<TAB>id` in the
/// orientation it was listed with. Missing routes read `(no route)` and
/// undefined ratios read `N/A`. The final line is not newline-terminated.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::render_report;
/// # use roadnet_core::{Road, RouteQuery, analyze};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let roads = vec![Road::new("A", "B", 4, 1)];
/// let analysis = analyze(&roads, &RouteQuery::new("A", "B"))?;
/// let mut buffer = Vec::new();
/// render_report(&analysis, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Fastest Route from A to B (4 KM):\nA\tB\t4\t1\n"));
/// assert!(text.ends_with("Original Map: 1.00"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(analysis: &MapAnalysis, mut writer: impl Write) -> io::Result<()> {
    let query = analysis.query();
    let (start, end) = (query.start(), query.end());

    write_route(
        &mut writer,
        &format!("Fastest Route from {start} to {end}"),
        analysis.fastest_route(),
    )?;

    writeln!(writer, "Roads of Barely Connected Map is:")?;
    write_roads(&mut writer, analysis.forest().roads())?;

    write_route(
        &mut writer,
        &format!("Fastest Route from {start} to {end} on Barely Connected Map"),
        analysis.barely_connected_route(),
    )?;

    writeln!(writer, "Analysis:")?;
    writeln!(
        writer,
        "Ratio of Construction Material Usage Between Barely Connected and Original Map: {}",
        format_ratio(analysis.material_usage_ratio())
    )?;
    write!(
        writer,
        "Ratio of Fastest Route Between Barely Connected and Original Map: {}",
        format_ratio(analysis.fastest_route_ratio())
    )?;
    writer.flush()
}

fn write_route(writer: &mut impl Write, title: &str, route: Option<&Route>) -> io::Result<()> {
    match route {
        Some(route) => {
            writeln!(writer, "{title} ({} KM):", route.total_length())?;
            write_roads(writer, route.roads())
        }
        None => writeln!(writer, "{title} (no route):"),
    }
}

fn write_roads(writer: &mut impl Write, roads: &[Road]) -> io::Result<()> {
    for road in roads {
        writeln!(writer, "{road}")?;
    }
    Ok(())
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "N/A".to_owned(), |value| format!("{value:.2}"))
}
