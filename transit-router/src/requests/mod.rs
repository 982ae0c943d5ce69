//! JSON request processing.
//!
//! Reads a document describing the network and a batch of queries, loads
//! the network in phases, and answers the queries in order as a JSON
//! array.

mod dto;
mod error;
mod handler;
mod load;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use tracing::info;

pub use dto::{
    BaseRequest, BusRequest, BusResponse, Document, ItemResponse, MapResponse, NotFoundResponse,
    RouteResponse, StatRequest, StatResponse, StopRequest, StopResponse,
};
pub use error::RequestError;
pub use handler::answer_stat_requests;
pub use load::{build_catalogue, load_network};

/// Load the network described by `document` and answer its queries.
pub fn process_document(document: Document) -> Result<Vec<StatResponse>, RequestError> {
    let catalogue = build_catalogue(&document.base_requests, document.routing_settings)?;
    answer_stat_requests(&catalogue, &document.stat_requests)
}

/// Read a document from `input` and write the answers to `output`.
///
/// Returns the number of answers written.
pub fn process<R: Read, W: Write>(input: R, mut output: W, pretty: bool) -> Result<usize, RequestError> {
    let document: Document = serde_json::from_reader(input)?;
    info!(
        base_requests = document.base_requests.len(),
        stat_requests = document.stat_requests.len(),
        routing = document.routing_settings.is_some(),
        "Document parsed"
    );

    let responses = process_document(document)?;

    if pretty {
        serde_json::to_writer_pretty(&mut output, &responses)?;
    } else {
        serde_json::to_writer(&mut output, &responses)?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(responses.len())
}

/// Open `path` for reading, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RequestError> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}
