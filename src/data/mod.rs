//! Input preparation: prices in, validated return series out

mod returns;

pub use returns::{prepare, PricePoint, ReturnKind, ReturnSeries};
