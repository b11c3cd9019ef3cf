//! Report encoders.
//!
//! Assembled rows are first projected onto a static [`Layout`] (column
//! order, headers, widths, shading) and then handed to the encoder for the
//! requested format.

pub mod csv;
pub mod error;
pub mod excel;
pub mod layout;
pub mod pdf;

pub use error::ExportError;
pub use layout::{Cell, Column, Field, Layout, RowShading, Table, TableRow, layout_for};
