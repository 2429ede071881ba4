//! Request/response boundary: resolves a file into numbers, runs the selection and
//! folds every outcome into a [`Response`].

use std::path::PathBuf;

use log::{info, warn};

use crate::error::{Error, Result};
use crate::service::SelectionService;
use crate::source::NumberSource;

/// "Find the `n`-th minimal number in the file at `path`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NthMinimalRequest {
    pub path: PathBuf,
    /// Signed so that zero and negative ranks reach validation instead of failing parsing.
    pub n: i64,
}

impl NthMinimalRequest {
    pub fn new(path: impl Into<PathBuf>, n: i64) -> Self {
        Self {
            path: path.into(),
            n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Value(i64),
    /// The request itself was wrong: bad rank, empty or missing file, wrong format.
    ClientError(String),
    /// Anything else, including unreadable files and engine defects.
    ServerError(String),
}

impl Response {
    pub fn from_result(result: Result<i64>) -> Self {
        match result {
            Ok(value) => Response::Value(value),
            Err(err) if err.is_client_error() => Response::ClientError(err.to_string()),
            Err(err) => {
                warn!("request failed: {err}");
                Response::ServerError(format!("error processing file: {err}"))
            }
        }
    }
}

/// Reads the numbers behind `request.path` from `source` and asks `service` for the
/// `request.n`-th smallest one.
pub fn find_nth_minimal<S: NumberSource + ?Sized>(
    source: &S,
    service: &SelectionService,
    request: &NthMinimalRequest,
) -> Response {
    let result = source
        .read_numbers(&request.path)
        .map_err(Error::from)
        .and_then(|numbers| {
            // Non-positive ranks map to 0, which validation rejects as out of range.
            let n = usize::try_from(request.n).unwrap_or(0);
            service.find_nth_minimal(&numbers, n)
        });
    if let Ok(value) = &result {
        info!(
            "rank {} of {} is {value}",
            request.n,
            request.path.display()
        );
    }
    Response::from_result(result)
}
