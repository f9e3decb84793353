mod gate;
mod listener_state;

pub use {
    gate::SessionAccessGate,
    listener_state::{ListenerConnection, ListenerState},
};
