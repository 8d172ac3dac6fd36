// File: crates/chart-plot/src/error.rs
// Summary: Error type for chart building.

use chart_data::DataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("column '{0}' is not numeric; pick a numeric Y column")]
    NonNumericY(String),

    #[error("no plottable rows for the selected columns")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, PlotError>;
