//! Small helpers shared by the request pipeline.

pub mod mime;
