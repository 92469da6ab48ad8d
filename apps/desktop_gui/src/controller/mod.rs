//! Controller layer: command dispatch from UI actions to the history queue.

pub mod orchestration;
