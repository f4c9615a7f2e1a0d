use std::io::Write;

use crate::collection_api::{CollectionApi, SearchQuery};
use crate::error::{FetchError, ReportError};

/// How far the report got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoResults,
    DetailsUnavailable { object_id: u64 },
    Reported { object_id: u64 },
}

/// Search, then fetch and print the first match.
///
/// The details request is only sent once the search has completed.
/// Failed fetches end the report with a message and are not errors;
/// a response that claims success but lacks the first ID or measurement is.
pub async fn run<W: Write>(
    api: &CollectionApi,
    query: &SearchQuery,
    out: &mut W,
) -> Result<Outcome, ReportError> {
    let result = match api.search(query).await {
        Ok(result) => result,
        Err(e) => {
            if !matches!(e, FetchError::NoMatches { .. }) {
                write_diagnostic(out, &e)?;
            }
            writeln!(out, "No results found.")?;
            return Ok(Outcome::NoResults);
        }
    };

    writeln!(out, "{} results found.", result.object_ids.len())?;
    writeln!(out, "Now fetching details for the first object ID retrieved.")?;

    let object_id = result
        .first_object_id()
        .ok_or(ReportError::EmptyObjectIds {
            total: result.total,
        })?;

    let details = match api.object(object_id).await {
        Ok(details) => details,
        Err(e) => {
            write_diagnostic(out, &e)?;
            writeln!(
                out,
                "Could not retrieve artwork details for first search result returned."
            )?;
            return Ok(Outcome::DetailsUnavailable { object_id });
        }
    };

    let size = details
        .first_measurement()
        .ok_or(ReportError::EmptyMeasurements { object_id })?;

    writeln!(out, "----")?;
    writeln!(out, "Title: {}", details.title)?;
    writeln!(out)?;
    writeln!(out, "By: {}", details.artist_display_name)?;
    writeln!(out)?;
    writeln!(out, "Imperial (US) measurements:")?;
    writeln!(out, "{}", details.dimensions)?;
    writeln!(out)?;
    writeln!(out, "Metric measurements:")?;
    writeln!(out, "Height (cm): {}", size.height)?;
    writeln!(out, "Width (cm): {}", size.width)?;
    writeln!(out)?;
    writeln!(out, "View artwork at this address:")?;
    writeln!(out, "{}", details.primary_image)?;

    Ok(Outcome::Reported { object_id })
}

fn write_diagnostic<W: Write>(out: &mut W, e: &FetchError) -> std::io::Result<()> {
    writeln!(
        out,
        "Could not retrieve data from endpoint, or could not decode data."
    )?;
    writeln!(out, "----")?;
    writeln!(out, "{e}")
}
