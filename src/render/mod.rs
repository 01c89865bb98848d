/// Rendering seam traits and the capability adapter.
pub mod backend;
pub mod ease;
pub mod inline;
