pub mod document;
pub mod rfp;
