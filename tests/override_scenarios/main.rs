//! End-to-end scenarios for `mmjumps`: the full plugin driven over an RDRAM image.

mod gameplay;
mod lifecycle;
mod table;
