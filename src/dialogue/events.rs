//! Messages flowing into and out of the dialogue engine.
use bevy::prelude::{Event, Message};

use crate::roster::CharacterId;

/// The player picked a choice button in the dialogue panel.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChooseOption {
    pub index: usize,
}

/// Terminal result of a doorman conversation, forwarded verbatim by the
/// engine. Outcome resolution happens elsewhere; the engine only relays.
#[derive(Event, Message, Debug, Clone)]
pub struct AttemptOutcome {
    pub character: CharacterId,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Entry { message: String },
    Denied { message: Option<String> },
}
