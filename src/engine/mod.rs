//! Card number engine: buffer, recognition state, and notifications.
//!
//! ## Key Types
//!
//! - `CardNumberEngine`: Per-session recognizer and validator
//! - `CardBuffer`: Slots laid out on the current mask
//! - `CardEdit`: Insert/delete events from the input surface
//! - `EngineResult`: Network and validity reported after each edit
//! - `EngineObserver`: Optional callback interface
//!
//! The engine is single-caller by construction (`&mut self` per edit) and
//! owns no resources. The catalog it borrows is immutable and can be shared
//! across threads and engines.

pub mod buffer;
pub mod observer;
pub mod recognizer;
pub mod state;

pub use buffer::{CardBuffer, Slot};
pub use observer::{EngineNotification, EngineObserver};
pub use recognizer::CardNumberEngine;
pub use state::{CardEdit, CardValidity, EngineResult};
