//! Reusable view components.
//!
//! DESIGN
//! ======
//! Components render state they are handed and report edits through
//! callbacks; none of them talks to the network or the session store.

pub mod form_fields;
pub mod ride_card;
