// Wizard core: the step state machine, list-editing operations over record
// sections, and the in-memory session store the HTTP handlers mutate.

pub mod controller;
pub mod handlers;
pub mod sections;
pub mod session;
